//! 图像加载与转换模块

pub mod loader;

pub use loader::ImageLoader;
