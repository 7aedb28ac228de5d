use crate::analysis::types::{HeadlineAssessment, Verdict};
use crate::config::Config;

/// 命中关键词时的结论文案
pub const HIGH_SENSATIONALISM: &str = "High Sensationalism Detected";

/// 煽动性标题对应的可信度分数
pub const SENSATIONAL_SCORE: f32 = 0.3;

/// 未命中关键词时的结论文案
pub const LOW_SENSATIONALISM: &str = "Low Sensationalism";

/// 平实标题对应的可信度分数
pub const CALM_SCORE: f32 = 0.8;

/// 标题煽动性分析器
///
/// 对标题做小写化关键词匹配，命中任意标题党关键词即判为煽动性标题。
pub struct HeadlineAnalyzer {
    /// 关键词表，构造时统一转为小写
    keywords: Vec<String>,

    /// 演示模式使用的占位标题
    placeholder_title: String,
}

impl HeadlineAnalyzer {
    /// 创建标题分析器
    pub fn new(config: &Config) -> Self {
        let keywords = config
            .analysis_config
            .clickbait_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();

        Self {
            keywords,
            placeholder_title: config.analysis_config.placeholder_title.clone(),
        }
    }

    /// 评估一条标题
    pub fn assess(&self, title: &str) -> HeadlineAssessment {
        let lowered = title.to_lowercase();

        // 保持关键词表顺序，便于前端稳定展示
        let matched_keywords: Vec<String> = self
            .keywords
            .iter()
            .filter(|keyword| lowered.contains(keyword.as_str()))
            .cloned()
            .collect();

        let verdict = if matched_keywords.is_empty() {
            Verdict::new(LOW_SENSATIONALISM, CALM_SCORE)
        } else {
            Verdict::new(HIGH_SENSATIONALISM, SENSATIONAL_SCORE)
        };

        HeadlineAssessment {
            verdict,
            title: title.to_string(),
            matched_keywords,
        }
    }

    /// 评估占位标题（URL分析不抓取真实页面）
    pub fn assess_placeholder(&self) -> HeadlineAssessment {
        self.assess(&self.placeholder_title)
    }

    /// 关键词数量
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}
