//! 模拟分析器模块

pub mod headline;
pub mod image;
pub mod registry;

pub use headline::HeadlineAnalyzer;
pub use registry::{
    get_analysis_config, get_analyzer_stats, get_headline_analyzer, get_image_analyzer,
    health_check, AnalyzerRegistry, AnalyzerStats,
};
pub use self::image::{ImageAnalyzer, ImageAssessment};
