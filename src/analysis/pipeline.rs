use crate::analysis::types::{HeadlineAssessment, ImageAnalysisReport, UrlAnalysisReport, Verdict};
use crate::analyzers::registry::{get_analysis_config, get_headline_analyzer, get_image_analyzer};
use crate::image::ImageLoader;
use crate::Result;
use image::{DynamicImage, GenericImageView};
use std::time::Instant;

/// URL分析的演示说明，随报告返回给前端
pub const URL_ANALYSIS_NOTE: &str =
    "URL analysis in this demo uses a placeholder image and title.";

/// URL分析中图像侧的固定结论
pub const PLACEHOLDER_IMAGE_LABEL: &str = "Likely Authentic";

/// URL分析中图像侧的固定分数
pub const PLACEHOLDER_IMAGE_SCORE: f32 = 0.9;

/// 分析流水线
///
/// 组合加载器与各分析器，产出完整的分析报告。
pub struct AnalysisPipeline;

impl AnalysisPipeline {
    /// 分析base64编码的图像
    pub fn analyze_image_base64(data: &str) -> Result<ImageAnalysisReport> {
        let start = Instant::now();
        let image = ImageLoader::from_base64(data)?;
        Self::analyze_image(image, start)
    }

    /// 分析原始字节形式的图像
    pub fn analyze_image_bytes(data: &[u8]) -> Result<ImageAnalysisReport> {
        let start = Instant::now();
        let image = ImageLoader::from_bytes(data)?;
        Self::analyze_image(image, start)
    }

    fn analyze_image(image: DynamicImage, start: Instant) -> Result<ImageAnalysisReport> {
        // 步骤1: 尺寸校验
        ImageLoader::validate_dimensions(&image)?;
        let (width, height) = image.dimensions();

        // 步骤2: 转为像素数组并评估
        let pixels = ImageLoader::to_array3(&image);
        let analyzer = get_image_analyzer()?;
        let assessment = analyzer.analyze(&pixels);

        let processing_time = start.elapsed().as_secs_f32();
        tracing::info!(
            "Image analysis completed: {} (score {:.2}, pixel mean {:.1}, {}x{}, {:.3}s)",
            assessment.verdict.label,
            assessment.verdict.score,
            assessment.pixel_mean,
            width,
            height,
            processing_time
        );

        Ok(ImageAnalysisReport {
            verdict: assessment.verdict,
            pixel_mean: assessment.pixel_mean,
            width,
            height,
            processing_time,
        })
    }

    /// 分析一条新闻URL
    ///
    /// 演示模式不抓取页面：图像侧使用固定的占位结论，
    /// 标题侧评估占位标题，综合分取两者平均。
    pub fn analyze_url(url: &str) -> Result<UrlAnalysisReport> {
        let start = Instant::now();

        let headline_analyzer = get_headline_analyzer()?;
        let headline: HeadlineAssessment = headline_analyzer.assess_placeholder();

        let image = Verdict::new(PLACEHOLDER_IMAGE_LABEL, PLACEHOLDER_IMAGE_SCORE);

        let combined = (image.score + headline.verdict.score) / 2.0;
        let overall = Verdict::from_combined_score(combined);

        let analysis_config = get_analysis_config()?;
        let processing_time = start.elapsed().as_secs_f32();

        tracing::info!(
            "URL analysis completed: {} -> {} (score {:.2}, {:.3}s)",
            url,
            overall.label,
            overall.score,
            processing_time
        );

        Ok(UrlAnalysisReport {
            url: url.to_string(),
            image,
            headline,
            overall,
            placeholder_image_url: analysis_config.placeholder_image_url,
            note: URL_ANALYSIS_NOTE.to_string(),
            processing_time,
        })
    }
}
