//! # 降采样模块
//!
//! ## 设计思路
//!
//! 把“任意分辨率 → 固定工作分辨率”收敛为单一入口。优先走
//! `fast_image_resize`（SIMD 卷积），失败时回退 `image::imageops::resize`，
//! 保证降采样阶段尽量不成为整条取色链路的失败点。
//!
//! 滤镜质量不是这里的目标：工作分辨率本身就是为了把计算成本压到有界，
//! 双线性档位已经足够。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba, RgbaImage};

use super::SamplerError;

/// 将输入图像缩放到目标分辨率。
///
/// 返回 `None` 仅出现在两条缩放路径都无法产出合法缓冲时。
pub(super) fn downscale(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Option<RgbaImage> {
    if target_width == 0 || target_height == 0 {
        return None;
    }

    match resize_with_fast_image_resize(image, target_width, target_height, filter) {
        Ok(resized) => Some(resized),
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 降采样失败，回退 image::imageops::resize：{}", err);
            Some(image::imageops::resize(image, target_width, target_height, filter))
        }
    }
}

fn resize_with_fast_image_resize(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, SamplerError> {
    let (src_width, src_height) = image.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| SamplerError::Resample(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
        to_fast_filter(filter),
    ));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| SamplerError::Resample(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| SamplerError::Resample("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downscale_produces_target_dimensions() {
        let src = RgbaImage::from_pixel(640, 400, Rgba([20, 40, 60, 255]));

        let resized = downscale(&src, 150, 150, FilterType::Triangle)
            .expect("downscale should succeed");

        assert_eq!(resized.dimensions(), (150, 150));
        assert_eq!(resized.as_raw().len(), 150 * 150 * 4);
    }

    #[test]
    fn downscale_preserves_solid_color() {
        let src = RgbaImage::from_pixel(1200, 900, Rgba([200, 100, 50, 255]));

        let resized = downscale(&src, 150, 150, FilterType::Triangle)
            .expect("downscale should succeed");

        for pixel in resized.pixels() {
            let [r, g, b, _] = pixel.0;
            assert!((r as i16 - 200).abs() <= 1, "red channel drifted: {}", r);
            assert!((g as i16 - 100).abs() <= 1, "green channel drifted: {}", g);
            assert!((b as i16 - 50).abs() <= 1, "blue channel drifted: {}", b);
        }
    }

    #[test]
    fn downscale_rejects_zero_target() {
        let src = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        assert!(downscale(&src, 0, 150, FilterType::Triangle).is_none());
        assert!(downscale(&src, 150, 0, FilterType::Triangle).is_none());
    }

    #[test]
    fn downscale_handles_upscaling_small_input() {
        let src = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));

        let resized = downscale(&src, 150, 150, FilterType::Triangle)
            .expect("upscale should succeed");

        assert_eq!(resized.dimensions(), (150, 150));
    }
}
