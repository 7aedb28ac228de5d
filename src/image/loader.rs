use crate::utils::error::HubError;
use crate::Result;
use base64::Engine;
use image::{DynamicImage, GenericImageView, ImageFormat};
use ndarray::Array3;

/// 最大图像字节数（50MB）
pub const MAX_IMAGE_BYTES: usize = 50 * 1024 * 1024;

/// 单边最大像素数
pub const MAX_IMAGE_DIMENSION: u32 = 8192;

pub struct ImageLoader;

impl ImageLoader {
    /// 从base64字符串加载图像
    pub fn from_base64(base64_data: &str) -> Result<DynamicImage> {
        // 检测并移除可能的数据URL前缀 (data:image/xxx;base64,)
        let base64_clean = if base64_data.starts_with("data:") {
            base64_data.split(',').nth(1).unwrap_or(base64_data)
        } else {
            base64_data
        };

        // 解码base64
        let image_bytes = base64::engine::general_purpose::STANDARD
            .decode(base64_clean.trim())
            .map_err(HubError::Base64)?;

        Self::from_bytes(&image_bytes)
    }

    /// 从原始字节加载图像
    pub fn from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
        if bytes.is_empty() {
            return Err(HubError::InvalidInput("Empty image data".to_string()));
        }

        // 检查文件大小
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(HubError::FileTooLarge(bytes.len(), MAX_IMAGE_BYTES));
        }

        // 检查格式魔数，只放行服务支持的格式
        let format = Self::detect_format(bytes)
            .ok_or_else(|| HubError::InvalidInput("Unrecognized image data".to_string()))?;
        if !Self::is_supported_format(format) {
            return Err(HubError::UnsupportedFormat(format!("{:?}", format)));
        }

        // 解码图像
        let image = image::load_from_memory(bytes).map_err(HubError::ImageDecode)?;

        Ok(image)
    }

    /// 检测图像格式
    pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
        image::guess_format(bytes).ok()
    }

    /// 验证图像格式是否支持
    pub fn is_supported_format(format: ImageFormat) -> bool {
        matches!(format, ImageFormat::Png | ImageFormat::Jpeg)
    }

    /// 验证图像尺寸
    pub fn validate_dimensions(image: &DynamicImage) -> Result<()> {
        let (width, height) = image.dimensions();

        // 检查最大尺寸
        if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
            return Err(HubError::InvalidInput(format!(
                "Image too large: {}x{}, maximum {}x{}",
                width, height, MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION
            )));
        }

        Ok(())
    }

    /// 转换DynamicImage为ndarray::Array3<f32> (HWC格式)
    pub fn to_array3(image: &DynamicImage) -> Array3<f32> {
        let rgb_image = image.to_rgb8();
        let (width, height) = rgb_image.dimensions();

        let mut array = Array3::<f32>::zeros((height as usize, width as usize, 3));
        for (x, y, pixel) in rgb_image.enumerate_pixels() {
            array[[y as usize, x as usize, 0]] = pixel[0] as f32;
            array[[y as usize, x as usize, 1]] = pixel[1] as f32;
            array[[y as usize, x as usize, 2]] = pixel[2] as f32;
        }

        array
    }
}
