pub mod config;
pub mod analyzers;
pub mod image;
pub mod analysis;
pub mod web;
pub mod utils;

// 重新导出主要类型
pub use analysis::{CredibilityBand, ImageAnalysisReport, UrlAnalysisReport, Verdict};
pub use config::Config;
pub use utils::error::HubError;

pub type Result<T> = std::result::Result<T, HubError>;
