//! # 壁纸定位模块
//!
//! ## 设计思路
//!
//! 壁纸路径由桌面环境维护，这里只做一次只读查询，不缓存：
//! 用户随时可能换壁纸，查询本身足够廉价，每次请求重新定位即可。
//!
//! ## 实现思路
//!
//! - macOS：`NSWorkspace.desktopImageURLForScreen(mainScreen)` 取当前
//!   主屏壁纸的文件 URL，再转成 POSIX 路径。
//! - 其余平台：本仓库是 macOS 集成层，直接返回空结果。
//! - 任意一步拿到空指针都视为“当前没有可用壁纸”，不报错。

use std::path::PathBuf;

/// 定位当前主屏壁纸文件。
///
/// 返回 `None` 表示桌面环境当前没有可读的壁纸文件（或非 macOS 平台）。
#[cfg(target_os = "macos")]
pub fn locate_current_wallpaper() -> Option<PathBuf> {
    use cocoa::base::id;
    use objc::{class, msg_send, sel, sel_impl};
    use std::ffi::CStr;

    unsafe {
        let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
        if workspace.is_null() {
            return None;
        }

        let screen: id = msg_send![class!(NSScreen), mainScreen];
        if screen.is_null() {
            log::debug!("主屏不可用，无法定位壁纸");
            return None;
        }

        let url: id = msg_send![workspace, desktopImageURLForScreen: screen];
        if url.is_null() {
            log::debug!("NSWorkspace 未返回壁纸 URL");
            return None;
        }

        let ns_path: id = msg_send![url, path];
        if ns_path.is_null() {
            return None;
        }

        let c_str: *const std::os::raw::c_char = msg_send![ns_path, UTF8String];
        if c_str.is_null() {
            return None;
        }

        let path = CStr::from_ptr(c_str).to_string_lossy().into_owned();
        log::debug!("当前壁纸路径: {}", path);
        Some(PathBuf::from(path))
    }
}

#[cfg(not(target_os = "macos"))]
pub fn locate_current_wallpaper() -> Option<PathBuf> {
    log::debug!("非 macOS 平台不提供壁纸定位");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_lookup_returns_existing_file_when_present() {
        // 桌面环境可能没有壁纸（CI 无图形会话），仅在有结果时校验其合法性
        if let Some(path) = locate_current_wallpaper() {
            assert!(path.is_absolute(), "wallpaper path should be absolute: {:?}", path);
        }
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn non_macos_lookup_is_absent() {
        assert!(locate_current_wallpaper().is_none());
    }
}
