use crate::image::loader::MAX_IMAGE_BYTES;
use anyhow::Result;

/// 服务运行配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器绑定地址
    pub bind_addr: String,

    /// 开发模式
    pub dev_mode: bool,

    /// 模拟分析配置
    pub analysis_config: AnalysisConfig,

    /// 服务器配置
    pub server_config: ServerConfig,
}

/// 模拟分析配置
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// 像素均值阈值，超过则判定为AI生成
    pub pixel_mean_threshold: f32,

    /// 标题党关键词
    pub clickbait_keywords: Vec<String>,

    /// 占位标题（演示模式不抓取真实页面）
    pub placeholder_title: String,

    /// URL分析展示用的占位图像地址
    pub placeholder_image_url: String,

    /// RNG种子（仅用于可复现的演示运行）
    pub rng_seed: Option<u64>,
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 请求超时时间（秒）
    pub request_timeout: u64,

    /// 最大请求体大小（字节）
    pub max_request_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pixel_mean_threshold: 128.0,
            clickbait_keywords: default_clickbait_keywords(),
            placeholder_title: "Shocking Secret of AI Revealed by Scientists!".to_string(),
            placeholder_image_url: "https://www.industrialempathy.com/img/remote/ZiClJf-1920w.jpg"
                .to_string(),
            rng_seed: None,
        }
    }
}

/// 默认的标题党关键词表
fn default_clickbait_keywords() -> Vec<String> {
    [
        "shocking",
        "secret",
        "unbelievable",
        "revealed",
        "what happens next",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    pub fn new(bind_addr: String, dev_mode: bool, rng_seed: Option<u64>) -> Result<Self> {
        let analysis_config = AnalysisConfig {
            rng_seed,
            ..AnalysisConfig::default()
        };

        let server_config = ServerConfig {
            request_timeout: if dev_mode { 300 } else { 60 }, // 开发模式更长超时
            max_request_size: MAX_IMAGE_BYTES,
        };

        Ok(Self {
            bind_addr,
            dev_mode,
            analysis_config,
            server_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_defaults_match_demo_constants() {
        let analysis = AnalysisConfig::default();
        assert_eq!(analysis.pixel_mean_threshold, 128.0);
        assert_eq!(analysis.clickbait_keywords.len(), 5);
        assert!(analysis
            .placeholder_title
            .to_lowercase()
            .contains("shocking"));
        assert!(analysis.rng_seed.is_none());
    }

    #[test]
    fn test_dev_mode_lengthens_timeout() {
        let dev = Config::new("127.0.0.1:0".to_string(), true, None).unwrap();
        let prod = Config::new("127.0.0.1:0".to_string(), false, None).unwrap();
        assert!(dev.server_config.request_timeout > prod.server_config.request_timeout);
        assert_eq!(prod.server_config.max_request_size, MAX_IMAGE_BYTES);
    }

    #[test]
    fn test_seed_is_threaded_into_analysis_config() {
        let config = Config::new("127.0.0.1:0".to_string(), false, Some(42)).unwrap();
        assert_eq!(config.analysis_config.rng_seed, Some(42));
    }
}
