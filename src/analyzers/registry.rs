use crate::analyzers::{HeadlineAnalyzer, ImageAnalyzer};
use crate::config::{AnalysisConfig, Config};
use crate::utils::error::HubError;
use crate::Result;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::sync::Arc;

/// 全局分析器注册表单例
static ANALYZER_REGISTRY: OnceCell<Arc<Mutex<AnalyzerRegistry>>> = OnceCell::new();

/// 分析器注册表
///
/// 服务启动时初始化一次，之后所有请求共享同一组分析器。
pub struct AnalyzerRegistry {
    /// 图像分析器
    image_analyzer: Arc<ImageAnalyzer>,

    /// 标题分析器
    headline_analyzer: Arc<HeadlineAnalyzer>,

    /// 初始化时使用的配置
    config: Config,
}

impl AnalyzerRegistry {
    /// 初始化全局注册表
    pub fn init(config: Config) -> Result<()> {
        tracing::info!("Initializing analyzer registry");

        let registry = Self::new(config);

        ANALYZER_REGISTRY
            .set(Arc::new(Mutex::new(registry)))
            .map_err(|_| HubError::Internal("Analyzer registry already initialized".to_string()))?;

        tracing::info!("Analyzer registry initialized successfully");
        Ok(())
    }

    fn new(config: Config) -> Self {
        let image_analyzer = Arc::new(ImageAnalyzer::new(&config));
        let headline_analyzer = Arc::new(HeadlineAnalyzer::new(&config));

        Self {
            image_analyzer,
            headline_analyzer,
            config,
        }
    }

    /// 获取全局注册表实例
    pub fn instance() -> Result<Arc<Mutex<AnalyzerRegistry>>> {
        ANALYZER_REGISTRY
            .get()
            .cloned()
            .ok_or_else(|| HubError::Internal("Analyzer registry not initialized".to_string()))
    }

    /// 图像分析器
    pub fn image_analyzer(&self) -> Arc<ImageAnalyzer> {
        self.image_analyzer.clone()
    }

    /// 标题分析器
    pub fn headline_analyzer(&self) -> Arc<HeadlineAnalyzer> {
        self.headline_analyzer.clone()
    }

    /// 分析配置
    pub fn analysis_config(&self) -> AnalysisConfig {
        self.config.analysis_config.clone()
    }
}

/// 获取图像分析器
pub fn get_image_analyzer() -> Result<Arc<ImageAnalyzer>> {
    let registry = AnalyzerRegistry::instance()?;
    let guard = registry.lock();
    Ok(guard.image_analyzer())
}

/// 获取标题分析器
pub fn get_headline_analyzer() -> Result<Arc<HeadlineAnalyzer>> {
    let registry = AnalyzerRegistry::instance()?;
    let guard = registry.lock();
    Ok(guard.headline_analyzer())
}

/// 获取分析配置
pub fn get_analysis_config() -> Result<AnalysisConfig> {
    let registry = AnalyzerRegistry::instance()?;
    let guard = registry.lock();
    Ok(guard.analysis_config())
}

/// 注册表是否已就绪
pub fn health_check() -> bool {
    ANALYZER_REGISTRY.get().is_some()
}

/// 分析器统计信息
#[derive(Debug, serde::Serialize)]
pub struct AnalyzerStats {
    /// 图像分析器是否就绪
    pub has_image_analyzer: bool,

    /// 标题分析器是否就绪
    pub has_headline_analyzer: bool,

    /// 图像分析使用的像素均值阈值
    pub pixel_mean_threshold: f32,

    /// 标题党关键词数量
    pub clickbait_keyword_count: usize,

    /// 是否使用固定种子RNG
    pub deterministic_rng: bool,
}

/// 汇总分析器统计信息
pub fn get_analyzer_stats() -> Result<AnalyzerStats> {
    let registry = AnalyzerRegistry::instance()?;
    let guard = registry.lock();

    Ok(AnalyzerStats {
        has_image_analyzer: true,
        has_headline_analyzer: true,
        pixel_mean_threshold: guard.image_analyzer().pixel_mean_threshold(),
        clickbait_keyword_count: guard.headline_analyzer().keyword_count(),
        deterministic_rng: guard.analysis_config().rng_seed.is_some(),
    })
}
