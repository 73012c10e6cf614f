//! # 刘海几何模块
//!
//! ## 设计思路
//!
//! 前端需要知道主屏有没有刘海、刘海多高多宽，才能决定小组件的布局；
//! 后端顺带提供“把窗口摆到刘海位置”的摆放命令。
//!
//! ## 实现思路
//!
//! - 刘海高度来自 `NSScreen.safeAreaInsets.top`（macOS 12+；
//!   无刘海机型恒为 0）。
//! - 刘海宽度系统不直接暴露，按屏宽比例估算并夹在典型机型区间内。
//! - 摆放命令用逻辑坐标：水平居中、贴住屏幕顶端（y=0）。

use serde::Serialize;

use crate::error::AppError;

/// 主屏与刘海几何信息。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotchInfo {
    /// 主屏是否有刘海（safeAreaInsets.top > 0）。
    pub has_notch: bool,
    /// 刘海高度（点）。
    pub notch_height: f64,
    /// 刘海宽度估算值（点）。
    pub notch_width: f64,
    /// 主屏宽度（点）。
    pub screen_width: f64,
    /// 主屏高度（点）。
    pub screen_height: f64,
    /// 刘海下方可用高度（点）。
    pub visible_height: f64,
}

/// 读取主屏几何：`(宽, 高, 刘海高, 刘海宽)`。
#[cfg(target_os = "macos")]
fn screen_metrics() -> Option<(f64, f64, f64, f64)> {
    use cocoa::base::id;
    use cocoa::foundation::NSRect;
    use objc::{class, msg_send, sel, sel_impl};

    #[repr(C)]
    #[derive(Debug, Clone, Copy)]
    struct EdgeInsets {
        top: f64,
        left: f64,
        bottom: f64,
        right: f64,
    }

    unsafe {
        let screen: id = msg_send![class!(NSScreen), mainScreen];
        if screen.is_null() {
            return None;
        }

        let frame: NSRect = msg_send![screen, frame];
        let insets: EdgeInsets = msg_send![screen, safeAreaInsets];

        let notch_height = insets.top;
        // 典型刘海宽度约 180~200 点，按屏宽估算并夹在区间内
        let notch_width = if notch_height > 0.0 {
            (frame.size.width * 0.121).clamp(200.0, 260.0)
        } else {
            0.0
        };

        Some((frame.size.width, frame.size.height, notch_height, notch_width))
    }
}

#[cfg(not(target_os = "macos"))]
fn screen_metrics() -> Option<(f64, f64, f64, f64)> {
    None
}

/// 查询主屏刘海信息。
///
/// 非 macOS 平台或主屏不可用时返回全零信息（无刘海）。
#[tauri::command]
pub fn get_notch_info() -> NotchInfo {
    let (screen_width, screen_height, notch_height, notch_width) =
        screen_metrics().unwrap_or((0.0, 0.0, 0.0, 0.0));

    NotchInfo {
        has_notch: notch_height > 0.0,
        notch_height,
        notch_width,
        screen_width,
        screen_height,
        visible_height: screen_height - notch_height,
    }
}

/// 将小组件窗口摆放到刘海位置（水平居中、贴顶）。
///
/// 无刘海机型退化为按窗口当前宽度在屏幕顶端居中。
#[tauri::command]
pub fn position_at_notch(window: tauri::WebviewWindow) -> Result<(), AppError> {
    let Some((screen_width, _screen_height, _notch_height, notch_width)) = screen_metrics() else {
        log::debug!("主屏信息不可用，跳过刘海摆放");
        return Ok(());
    };

    let target_width = if notch_width > 0.0 {
        notch_width
    } else {
        let size = window
            .outer_size()
            .map_err(|e| AppError::Window(format!("Failed to get window size: {}", e)))?;
        let scale = window
            .scale_factor()
            .map_err(|e| AppError::Window(format!("Failed to get scale factor: {}", e)))?;
        size.width as f64 / scale
    };

    let x = (screen_width - target_width) / 2.0;

    window
        .set_position(tauri::LogicalPosition::new(x, 0.0))
        .map_err(|e| AppError::Window(format!("Failed to set window position: {}", e)))?;

    log::debug!("小组件已摆放到刘海位置 x={:.1} width={:.1}", x, target_width);
    Ok(())
}
