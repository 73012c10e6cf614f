//! # Tauri 命令层
//!
//! ## 设计思路
//!
//! 命令层仅做 IPC 参数接收与结果返回，不承载业务逻辑。
//! 取色查询遵循“失败即缺省”：任何一步失败都折叠为 `None`，
//! 前端收到空结果后用 `get_fallback_color` 的默认色兜底。

use tauri::State;

use crate::error::AppError;

use super::service::{SamplerConfigPayload, WallpaperServiceState};

/// 查询当前壁纸主导色。
///
/// 取色是 CPU 密集操作（解码 + 降采样 + 均值），放到阻塞线程池执行，
/// 避免占住 IPC 线程；结果经异步返回通道送回前端。
#[tauri::command]
pub async fn get_wallpaper_color(
    state: State<'_, WallpaperServiceState>,
) -> Result<Option<String>, AppError> {
    let config = match state.config_snapshot() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("⚠️ 读取采样配置失败，取色返回空结果: {}", err);
            return Ok(None);
        }
    };

    let color = match tokio::task::spawn_blocking(move || super::query_wallpaper_color(&config)).await
    {
        Ok(color) => color,
        Err(err) => {
            log::warn!("⚠️ 取色任务执行失败，返回空结果: {}", err);
            None
        }
    };

    Ok(color.map(|c| c.to_hex()))
}

/// 查询取色失败时前端应使用的默认色。
///
/// 默认色定义在调用方边界，采样函数本身永远不会产出它。
#[tauri::command]
pub fn get_fallback_color() -> String {
    super::DEFAULT_ACCENT_COLOR.to_hex()
}

/// 调整采样配置（工作分辨率 / 滤镜）。
#[tauri::command]
pub fn set_sampler_config(
    state: State<'_, WallpaperServiceState>,
    config: SamplerConfigPayload,
) -> Result<(), AppError> {
    state.set_sampler_config(config)
}

/// 查询后端当前生效采样配置。
#[tauri::command]
pub fn get_sampler_config(
    state: State<'_, WallpaperServiceState>,
) -> Result<SamplerConfigPayload, AppError> {
    state.get_sampler_config()
}
