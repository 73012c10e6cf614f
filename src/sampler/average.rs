//! # 均值计算模块
//!
//! ## 设计思路
//!
//! 主导色定义为逐通道算术均值，不做聚类或感知加权。累加使用 f64：
//! 工作分辨率上限 512×512 时通道累加和最大约 6.7e7，双精度无精度损失。
//!
//! ## 实现思路
//!
//! - 逐像素累加 R/G/B 三通道，alpha 完全忽略（已知局限：半透明壁纸
//!   不在支持范围内，均值不做预乘修正）。
//! - 均值先归一化到 [0,1]（`sum / (count * 255)`），再乘回 255 并
//!   截断取整。截断而非四舍五入：127.5 → 127。

use image::RgbaImage;

use super::Color;

/// 对整个 RGBA 缓冲计算逐通道均值颜色。
///
/// 求和满足交换律，结果与像素遍历顺序无关。
/// 零像素输入返回 `None`。
pub(super) fn mean_color(pixels: &RgbaImage) -> Option<Color> {
    let (width, height) = pixels.dimensions();
    let count = (width as u64) * (height as u64);
    if count == 0 {
        return None;
    }

    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;

    for pixel in pixels.pixels() {
        let [r, g, b, _alpha] = pixel.0;
        sum_r += r as f64;
        sum_g += g as f64;
        sum_b += b as f64;
    }

    let denominator = count as f64 * 255.0;
    let mean_r = sum_r / denominator;
    let mean_g = sum_g / denominator;
    let mean_b = sum_b / denominator;

    Some(Color::new(
        (mean_r * 255.0) as u8,
        (mean_g * 255.0) as u8,
        (mean_b * 255.0) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn solid_color_mean_is_exact() {
        let img = RgbaImage::from_pixel(37, 23, Rgba([91, 182, 13, 255]));
        let color = mean_color(&img).expect("mean of non-empty image");
        assert_eq!(color, Color::new(91, 182, 13));
    }

    #[test]
    fn half_white_half_black_truncates_to_127() {
        let img = RgbaImage::from_fn(100, 100, |_, y| {
            if y < 50 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });

        // 127.5 截断为 127，不是四舍五入到 128
        let color = mean_color(&img).expect("mean of non-empty image");
        assert_eq!(color, Color::new(127, 127, 127));
        assert_eq!(color.to_hex(), "#7F7F7F");
    }

    #[test]
    fn mean_of_even_two_color_split() {
        let a = Rgba([10u8, 20, 30, 255]);
        let b = Rgba([50u8, 60, 70, 255]);
        let img = RgbaImage::from_fn(64, 64, |x, _| if x < 32 { a } else { b });

        let color = mean_color(&img).expect("mean of non-empty image");
        assert_eq!(color, Color::new(30, 40, 50));
    }

    #[test]
    fn alpha_channel_is_ignored() {
        let img = RgbaImage::from_fn(10, 10, |x, _| {
            let alpha = if x % 2 == 0 { 0 } else { 255 };
            Rgba([120, 60, 200, alpha])
        });

        let color = mean_color(&img).expect("mean of non-empty image");
        assert_eq!(color, Color::new(120, 60, 200));
    }

    #[test]
    fn empty_buffer_yields_none() {
        let img = RgbaImage::new(0, 0);
        assert!(mean_color(&img).is_none());
    }

    #[test]
    fn mean_is_traversal_order_invariant() {
        let img = RgbaImage::from_fn(40, 40, |x, y| {
            Rgba([(x * 5 % 256) as u8, (y * 7 % 256) as u8, ((x + y) % 256) as u8, 255])
        });

        // 行序反转后均值不变：求和可交换
        let mut reversed_rows: Vec<u8> = Vec::with_capacity(img.as_raw().len());
        for y in (0..40u32).rev() {
            let row_start = (y as usize) * 40 * 4;
            reversed_rows.extend_from_slice(&img.as_raw()[row_start..row_start + 40 * 4]);
        }
        let reversed = RgbaImage::from_raw(40, 40, reversed_rows).expect("rebuild image");

        assert_eq!(mean_color(&img), mean_color(&reversed));
    }
}
