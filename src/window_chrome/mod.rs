//! # 窗口样式模块（window_chrome）
//!
//! ## 设计思路
//!
//! 小组件窗口不是常规应用窗口：无边框、背景透明、悬浮在普通窗口之上、
//! 驻留所有空间且不参与 Cmd+Tab 循环。这组样式在启动时应用一次，
//! 并通过命令暴露给前端以便运行时重新应用——所有调用幂等。
//!
//! ## 实现思路
//!
//! - 通过 Tauri 窗口句柄拿到底层 `NSWindow`，用 cocoa 的类型化
//!   接口设置样式位、透明度、阴影与层级。
//! - 集合行为 `canJoinAllSpaces | stationary | ignoresCycle`：
//!   切换空间/调度中心时小组件保持原位。
//! - 非 macOS 平台全部退化为 no-op，保证跨平台编译。
//!
//! 刘海几何与窗口摆放在 `notch` 子模块。

pub mod notch;

pub use notch::NotchInfo;

use crate::error::AppError;

/// 浮动窗口层级（`CGWindowLevelForKey(.floatingWindow)` 的取值）。
#[cfg(target_os = "macos")]
const FLOATING_WINDOW_LEVEL: cocoa::foundation::NSInteger = 3;

/// 应用小组件窗口样式。
///
/// 幂等：重复调用只是把同一组样式再设置一遍。
/// 必须在主线程调用（`setup` 钩子内，或经 `run_on_main_thread` 调度）。
#[cfg(target_os = "macos")]
pub fn apply_widget_chrome(window: &tauri::WebviewWindow) -> Result<(), AppError> {
    use cocoa::appkit::{NSWindow, NSWindowCollectionBehavior, NSWindowStyleMask};
    use cocoa::base::{id, NO, YES};
    use objc::{class, msg_send, sel, sel_impl};

    let ns_window = window
        .ns_window()
        .map_err(|e| AppError::Window(format!("Failed to get NSWindow handle: {}", e)))?
        as id;

    unsafe {
        ns_window.setStyleMask_(NSWindowStyleMask::NSBorderlessWindowMask);
        ns_window.setOpaque_(NO);

        let clear: id = msg_send![class!(NSColor), clearColor];
        ns_window.setBackgroundColor_(clear);

        // 阴影保留：透明窗体下阴影由内容形状决定
        ns_window.setHasShadow_(YES);
        ns_window.setLevel_(FLOATING_WINDOW_LEVEL);

        ns_window.setCollectionBehavior_(
            NSWindowCollectionBehavior::NSWindowCollectionBehaviorCanJoinAllSpaces
                | NSWindowCollectionBehavior::NSWindowCollectionBehaviorStationary
                | NSWindowCollectionBehavior::NSWindowCollectionBehaviorIgnoresCycle,
        );
    }

    log::info!("✅ 小组件窗口样式已应用（无边框 / 透明 / 浮动层级 / 全空间驻留）");
    Ok(())
}

#[cfg(not(target_os = "macos"))]
pub fn apply_widget_chrome(_window: &tauri::WebviewWindow) -> Result<(), AppError> {
    log::debug!("非 macOS 平台跳过窗口样式设置");
    Ok(())
}

/// 重新应用窗口集合行为与样式。
///
/// 对应前端在窗口状态异常（如系统事件重置层级）后的自愈入口。
#[tauri::command]
pub fn set_window_collection_behavior(window: tauri::WebviewWindow) -> Result<(), AppError> {
    let target = window.clone();
    window
        .run_on_main_thread(move || {
            if let Err(err) = apply_widget_chrome(&target) {
                log::warn!("⚠️ 重新应用窗口样式失败: {}", err);
            }
        })
        .map_err(|e| AppError::Window(format!("Failed to dispatch to main thread: {}", e)))
}
