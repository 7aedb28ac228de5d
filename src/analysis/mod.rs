//! 分析流水线与报告类型

pub mod pipeline;
pub mod types;

pub use pipeline::AnalysisPipeline;
pub use types::{
    CredibilityBand, HeadlineAssessment, ImageAnalysisReport, UrlAnalysisReport, Verdict,
};
