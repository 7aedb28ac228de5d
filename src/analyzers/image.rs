use crate::analysis::types::Verdict;
use crate::config::Config;
use ndarray::Array3;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 像素均值超过阈值时的结论文案
pub const LIKELY_AI_GENERATED: &str = "Likely AI-Generated";

/// AI生成结论对应的可信度分数
pub const AI_GENERATED_SCORE: f32 = 0.2;

/// 判定为真实图像时的结论文案
pub const LIKELY_AUTHENTIC: &str = "Likely Authentic";

/// 真实图像结论对应的可信度分数
pub const AUTHENTIC_SCORE: f32 = 0.9;

/// 无法判定时的结论文案
pub const INCONCLUSIVE: &str = "Analysis Inconclusive";

/// 无法判定结论对应的可信度分数
pub const INCONCLUSIVE_SCORE: f32 = 0.6;

/// 图像侧的原始评估结果
#[derive(Debug, Clone)]
pub struct ImageAssessment {
    /// 评估结论
    pub verdict: Verdict,

    /// 全图像素均值（0-255）
    pub pixel_mean: f32,
}

/// 模拟图像取证分析器
///
/// 以全图像素均值近似“取证信号”：亮图判为AI生成，
/// 暗图在真实与存疑之间掷硬币。仅用于演示，不做真实推理。
pub struct ImageAnalyzer {
    /// 像素均值阈值
    pixel_mean_threshold: f32,

    /// 硬币RNG，演示模式可用固定种子复现
    rng: Mutex<StdRng>,
}

impl ImageAnalyzer {
    /// 创建图像分析器
    pub fn new(config: &Config) -> Self {
        let rng = match config.analysis_config.rng_seed {
            Some(seed) => {
                tracing::info!("Image analyzer using seeded RNG: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            pixel_mean_threshold: config.analysis_config.pixel_mean_threshold,
            rng: Mutex::new(rng),
        }
    }

    /// 评估一张图像
    ///
    /// 输入为HWC布局的像素数组，取值0-255。
    pub fn analyze(&self, pixels: &Array3<f32>) -> ImageAssessment {
        let pixel_mean = pixels.mean().unwrap_or(0.0);

        let verdict = if pixel_mean > self.pixel_mean_threshold {
            Verdict::new(LIKELY_AI_GENERATED, AI_GENERATED_SCORE)
        } else if self.rng.lock().gen_bool(0.5) {
            Verdict::new(LIKELY_AUTHENTIC, AUTHENTIC_SCORE)
        } else {
            Verdict::new(INCONCLUSIVE, INCONCLUSIVE_SCORE)
        };

        ImageAssessment {
            verdict,
            pixel_mean,
        }
    }

    /// 当前使用的阈值
    pub fn pixel_mean_threshold(&self) -> f32 {
        self.pixel_mean_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::CredibilityBand;

    fn test_analyzer(seed: Option<u64>) -> ImageAnalyzer {
        let config = Config::new("127.0.0.1:0".to_string(), false, seed).unwrap();
        ImageAnalyzer::new(&config)
    }

    fn uniform_pixels(value: f32) -> Array3<f32> {
        Array3::from_elem((4, 4, 3), value)
    }

    #[test]
    fn test_bright_image_flagged_as_ai_generated() {
        let analyzer = test_analyzer(None);
        let assessment = analyzer.analyze(&uniform_pixels(200.0));

        assert_eq!(assessment.verdict.label, LIKELY_AI_GENERATED);
        assert_eq!(assessment.verdict.score, AI_GENERATED_SCORE);
        assert_eq!(assessment.verdict.band, CredibilityBand::Low);
        assert_eq!(assessment.pixel_mean, 200.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 均值恰好等于阈值时不判定为AI生成
        let analyzer = test_analyzer(Some(1));
        let assessment = analyzer.analyze(&uniform_pixels(128.0));
        assert_ne!(assessment.verdict.label, LIKELY_AI_GENERATED);
    }

    #[test]
    fn test_dark_image_yields_coin_flip_outcome() {
        let analyzer = test_analyzer(None);
        let assessment = analyzer.analyze(&uniform_pixels(30.0));

        let authentic =
            assessment.verdict.label == LIKELY_AUTHENTIC && assessment.verdict.score == AUTHENTIC_SCORE;
        let inconclusive = assessment.verdict.label == INCONCLUSIVE
            && assessment.verdict.score == INCONCLUSIVE_SCORE;
        assert!(authentic || inconclusive);
    }

    #[test]
    fn test_seeded_analyzers_agree() {
        let first = test_analyzer(Some(7));
        let second = test_analyzer(Some(7));

        for _ in 0..16 {
            let a = first.analyze(&uniform_pixels(30.0));
            let b = second.analyze(&uniform_pixels(30.0));
            assert_eq!(a.verdict.label, b.verdict.label);
        }
    }
}
