//! # 壁纸解码模块
//!
//! ## 设计思路
//!
//! 将“文件 → RGBA 栅格”集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低超大壁纸触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 存在性检查
//! 2. 仅读取 header 尺寸，按像素/内存上限快速拒绝
//! 3. 完整解码
//! 4. 转换 RGBA，并校验字节长度一致性

use image::GenericImageView;
use image::RgbaImage;
use std::path::Path;

use super::WallpaperError;

/// 解码后的像素上限（`width * height`）。桌面壁纸在 8K 分辨率下约 3300 万像素。
const MAX_DECODED_PIXELS: u64 = 40_000_000;
/// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
const MAX_DECODED_BYTES: u64 = 160 * 1024 * 1024;

/// 将壁纸文件解码为 RGBA 栅格。
pub fn decode_wallpaper(path: &Path) -> Result<RgbaImage, WallpaperError> {
    if !path.exists() {
        return Err(WallpaperError::FileSystem(format!(
            "壁纸文件不存在：{}",
            path.display()
        )));
    }

    let (header_width, header_height) = inspect_dimensions(path)?;
    validate_decoded_limits(header_width, header_height)?;

    let decoded = image::ImageReader::open(path)
        .map_err(|e| WallpaperError::FileSystem(format!("无法打开壁纸文件：{}", e)))?
        .with_guessed_format()
        .map_err(|e| WallpaperError::InvalidFormat(format!("无法识别壁纸格式：{}", e)))?
        .decode()
        .map_err(|e| WallpaperError::Decode(format!("壁纸解码失败：{}", e)))?;

    let (width, height) = decoded.dimensions();
    validate_decoded_limits(width, height)?;

    let rgba = decoded.to_rgba8();

    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| WallpaperError::ResourceLimit("壁纸尺寸导致内存溢出风险".to_string()))?;

    if rgba.as_raw().len() != expected_len {
        return Err(WallpaperError::Decode("解码后像素数据长度异常".to_string()));
    }

    log::info!(
        "✅ 壁纸解码成功 - 路径: {} 尺寸: {}x{}",
        path.display(),
        width,
        height
    );

    Ok(rgba)
}

/// 仅通过图片头信息读取宽高。
///
/// 用于在完整解码前做像素限制检查。
fn inspect_dimensions(path: &Path) -> Result<(u32, u32), WallpaperError> {
    image::ImageReader::open(path)
        .map_err(|e| WallpaperError::FileSystem(format!("无法打开壁纸文件：{}", e)))?
        .with_guessed_format()
        .map_err(|e| WallpaperError::InvalidFormat(format!("无法识别壁纸格式：{}", e)))?
        .into_dimensions()
        .map_err(|e| WallpaperError::InvalidFormat(format!("无法读取壁纸尺寸：{}", e)))
}

fn validate_decoded_limits(width: u32, height: u32) -> Result<(), WallpaperError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| WallpaperError::ResourceLimit("壁纸像素数溢出".to_string()))?;

    if pixels > MAX_DECODED_PIXELS {
        return Err(WallpaperError::ResourceLimit(format!(
            "壁纸像素过大：{} 像素（限制：{} 像素）",
            pixels, MAX_DECODED_PIXELS
        )));
    }

    let estimated = pixels
        .checked_mul(4)
        .ok_or_else(|| WallpaperError::ResourceLimit("壁纸解码内存估算溢出".to_string()))?;

    if estimated > MAX_DECODED_BYTES {
        return Err(WallpaperError::ResourceLimit(format!(
            "壁纸解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
            estimated as f64 / 1024.0 / 1024.0,
            MAX_DECODED_BYTES as f64 / 1024.0 / 1024.0
        )));
    }

    Ok(())
}
