//! # 壁纸主导色采样模块（sampler）
//!
//! ## 设计思路
//!
//! 该模块把“任意分辨率位图 → 主导色”按职责拆分为多个子模块，
//! 保持核心函数纯粹、无状态、可并发调用：
//!
//! - `color`：颜色值对象与 `#RRGGBB` 规范文本
//! - `config`：工作分辨率与滤镜策略（有界可调）
//! - `resample`：降采样到固定工作分辨率（SIMD 优先，回退 imageops）
//! - `average`：逐通道算术均值与截断取整
//! - `error`：配置校验与内部阶段错误
//!
//! ## 实现思路
//!
//! 处理链路固定为：
//! 1. 尺寸守卫（零宽/零高直接判定无结果）
//! 2. 降采样到 `sample_dimension × sample_dimension`（已在工作分辨率则跳过）
//! 3. 逐通道 f64 累加求均值，截断回字节域
//!
//! ## 失败语义
//!
//! `sample` 永不报错：任一阶段无法产出可用栅格时返回 `None`，
//! 由调用方（壁纸查询层）以默认色兜底。这是“尽力而为的视觉提示”，
//! 不值得让一条取色失败打断前端渲染。

mod average;
mod color;
mod config;
mod error;
mod resample;

pub use color::Color;
pub use config::{
    SamplerConfig, DEFAULT_SAMPLE_DIMENSION, MAX_SAMPLE_DIMENSION, MIN_SAMPLE_DIMENSION,
};
pub use error::SamplerError;

use image::RgbaImage;

/// 计算位图的主导色（逐通道算术均值）。
///
/// 输入为调用方独占的 RGBA 缓冲，本函数不持有任何超出调用周期的引用；
/// 纯 CPU 计算，无共享状态，可从多线程并发调用。
///
/// alpha 通道完全忽略（已知局限，见 `average` 模块说明）。
///
/// # 返回
/// - `Some(Color)`：降采样与均值计算成功
/// - `None`：零尺寸输入或降采样失败
///
/// # 示例
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use jaybar::sampler::{sample, SamplerConfig};
///
/// let wallpaper = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
/// let color = sample(&wallpaper, &SamplerConfig::default()).expect("solid bitmap has a color");
/// assert_eq!(color.to_hex(), "#FF0000");
/// ```
pub fn sample(image: &RgbaImage, config: &SamplerConfig) -> Option<Color> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        log::debug!("采样输入为零尺寸位图（{}x{}），返回空结果", width, height);
        return None;
    }

    let dimension = config.sample_dimension;

    // 已在工作分辨率时跳过缩放，结果与直接均值一致
    let resampled;
    let working: &RgbaImage = if (width, height) == (dimension, dimension) {
        image
    } else {
        resampled = resample::downscale(image, dimension, dimension, config.resize_filter)?;
        &resampled
    };

    average::mean_color(working)
}
