use serde::{Deserialize, Serialize};
use std::fmt;

/// 低于此分数的结果落入红色告警区
pub const LOW_BAND_CUTOFF: f32 = 0.5;

/// 达到此分数的结果落入绿色可信区
pub const HIGH_BAND_CUTOFF: f32 = 0.7;

/// 可信度分档
///
/// 分数区间与前端横幅颜色一一对应：
/// Low 为红色告警，Medium 为黄色提示，High 为绿色通过。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityBand {
    Low,
    Medium,
    High,
}

impl CredibilityBand {
    /// 根据分数划分档位
    ///
    /// 边界语义：0.5 属于 Medium，0.7 属于 High。
    pub fn from_score(score: f32) -> Self {
        if score < LOW_BAND_CUTOFF {
            CredibilityBand::Low
        } else if score < HIGH_BAND_CUTOFF {
            CredibilityBand::Medium
        } else {
            CredibilityBand::High
        }
    }
}

impl fmt::Display for CredibilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CredibilityBand::Low => "LOW",
            CredibilityBand::Medium => "MEDIUM",
            CredibilityBand::High => "HIGH",
        };
        write!(f, "{}", text)
    }
}

/// 单项分析结论
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// 结论文案
    pub label: String,

    /// 可信度分数，[0, 1]
    pub score: f32,

    /// 分数对应的档位
    pub band: CredibilityBand,
}

impl Verdict {
    /// 构造结论并将分数收敛到 [0, 1]
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        let score = score.clamp(0.0, 1.0);
        Self {
            label: label.into(),
            score,
            band: CredibilityBand::from_score(score),
        }
    }

    /// 由综合分数构造结论，文案直接使用档位名称
    pub fn from_combined_score(score: f32) -> Self {
        let score = score.clamp(0.0, 1.0);
        let band = CredibilityBand::from_score(score);
        Self {
            label: band.to_string(),
            score,
            band,
        }
    }
}

/// 图像分析报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysisReport {
    /// 分析结论
    pub verdict: Verdict,

    /// 全图像素均值（0-255）
    pub pixel_mean: f32,

    /// 图像宽度
    pub width: u32,

    /// 图像高度
    pub height: u32,

    /// 处理耗时（秒）
    pub processing_time: f32,
}

/// 标题煽动性评估
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineAssessment {
    /// 评估结论
    pub verdict: Verdict,

    /// 被评估的标题
    pub title: String,

    /// 命中的关键词
    pub matched_keywords: Vec<String>,
}

/// URL分析报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlAnalysisReport {
    /// 被分析的URL
    pub url: String,

    /// 图像侧结论（演示模式固定为占位结果）
    pub image: Verdict,

    /// 标题侧评估
    pub headline: HeadlineAssessment,

    /// 综合结论，取两侧分数的平均值
    pub overall: Verdict,

    /// 前端展示用的占位图像地址
    pub placeholder_image_url: String,

    /// 演示说明
    pub note: String,

    /// 处理耗时（秒）
    pub processing_time: f32,
}
