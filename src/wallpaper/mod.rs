//! # 壁纸取色模块（wallpaper）
//!
//! ## 设计思路
//!
//! 该模块将“定位壁纸 → 解码 → 采样 → IPC 返回”按职责拆分为多个子模块：
//!
//! - `commands`：仅做 IPC 入参/出参适配（薄封装）
//! - `service`：承载可注入状态（`WallpaperServiceState`）
//! - `lookup`：macOS 桌面壁纸定位（NSWorkspace 委托）
//! - `decode`：文件解码、像素/内存上限控制
//! - `error`：内部错误模型
//!
//! 纯计算部分不在这里——主导色算法在 [`crate::sampler`]，
//! 本模块只负责喂给它一张解码好的位图。
//!
//! ## 失败语义
//!
//! 查询链路的每个失败分支（没有壁纸、解码失败、采样失败）都折叠为
//! “无结果”，前端用 [`DEFAULT_ACCENT_COLOR`] 兜底。查询幂等且廉价，
//! 每次请求重新执行，不缓存、不重试。
//!
//! ## 调用链
//!
//! ```text
//! 前端 invoke
//!    ↓
//! commands.rs（参数适配 + spawn_blocking）
//!    ↓
//! query_wallpaper_color（本文件：阶段编排 + 耗时日志）
//!    ├─ lookup.rs（NSWorkspace 壁纸定位）
//!    ├─ decode.rs（解码 + 资源上限）
//!    └─ sampler::sample（降采样 + 均值）
//!    ↓
//! Option<十六进制色值> 返回前端
//! ```

pub mod commands;
mod decode;
mod error;
mod lookup;
mod service;

pub use decode::decode_wallpaper;
pub use error::WallpaperError;
pub use lookup::locate_current_wallpaper;
pub use service::{SamplerConfigPayload, WallpaperServiceState};

use std::time::Instant;

use crate::sampler::{sample, Color, SamplerConfig};

/// 取色失败时调用方应使用的默认强调色（淡薰衣草紫，`#C496D9`）。
///
/// 该常量属于调用方边界：采样函数在无法计算时返回空结果，
/// 永远不会自行产出这个颜色。
pub const DEFAULT_ACCENT_COLOR: Color = Color::new(196, 150, 217);

/// 执行一次完整的壁纸取色查询。
///
/// 同步、CPU 密集；调用方负责把它放到合适的线程上
/// （命令层通过 `spawn_blocking` 调度）。
pub fn query_wallpaper_color(config: &SamplerConfig) -> Option<Color> {
    let total_start = Instant::now();

    let Some(path) = lookup::locate_current_wallpaper() else {
        log::info!("当前没有可定位的壁纸，取色返回空结果");
        return None;
    };

    let decode_start = Instant::now();
    let bitmap = match decode::decode_wallpaper(&path) {
        Ok(bitmap) => bitmap,
        Err(err) => {
            log::warn!("⚠️ 壁纸解码失败，取色返回空结果: {}", err);
            return None;
        }
    };
    let decode_elapsed = decode_start.elapsed();

    let sample_start = Instant::now();
    let color = sample(&bitmap, config);
    let sample_elapsed = sample_start.elapsed();

    let total_elapsed = total_start.elapsed();
    match &color {
        Some(color) => log::info!(
            "✅ 壁纸取色完成 - 结果: {} decode={}ms sample={}ms total={}ms",
            color,
            decode_elapsed.as_millis(),
            sample_elapsed.as_millis(),
            total_elapsed.as_millis()
        ),
        None => log::warn!(
            "⚠️ 壁纸采样无结果 - decode={}ms sample={}ms total={}ms",
            decode_elapsed.as_millis(),
            sample_elapsed.as_millis(),
            total_elapsed.as_millis()
        ),
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_color_matches_documented_value() {
        assert_eq!(DEFAULT_ACCENT_COLOR, Color::new(196, 150, 217));
        assert_eq!(DEFAULT_ACCENT_COLOR.to_hex(), "#C496D9");
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn query_without_wallpaper_source_is_absent() {
        assert!(query_wallpaper_color(&SamplerConfig::default()).is_none());
    }
}
