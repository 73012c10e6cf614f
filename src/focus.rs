//! 前台应用信息模块
//!
//! # 设计思路
//!
//! 回答“当前前台是哪个应用”这一查询：本地化名称 + 渲染为 PNG 的图标。
//! 与壁纸取色同一失败哲学：任何一环拿不到数据就整体返回空结果，
//! 绝不向前端抛错——前端缺省展示即可。
//!
//! # 实现思路
//!
//! - `NSWorkspace.frontmostApplication` 读取前台应用（只读查询，
//!   离主线程调用是常见做法）。
//! - 图标链路：`NSImage → TIFFRepresentation → NSBitmapImageRep → PNG`，
//!   渲染目标为固定小尺寸，PNG 字节经 Base64 编码跨 IPC 传输。
//! - 查询廉价且幂等，每次请求重新执行，不缓存。

#[cfg(target_os = "macos")]
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;

/// 前台应用信息。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusedApp {
    /// 应用本地化名称。
    pub name: String,
    /// PNG 图标的 Base64 编码；图标渲染失败时为空。
    pub icon_png_base64: Option<String>,
}

/// 图标渲染目标尺寸（点）。
#[cfg(target_os = "macos")]
const ICON_POINT_SIZE: f64 = 64.0;

/// 读取当前前台应用的名称与图标。
#[cfg(target_os = "macos")]
pub fn get_focused_app() -> Option<FocusedApp> {
    use cocoa::base::id;
    use objc::{class, msg_send, sel, sel_impl};
    use std::ffi::CStr;

    unsafe {
        let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
        if workspace.is_null() {
            return None;
        }

        let app: id = msg_send![workspace, frontmostApplication];
        if app.is_null() {
            log::debug!("当前没有前台应用");
            return None;
        }

        let ns_name: id = msg_send![app, localizedName];
        if ns_name.is_null() {
            return None;
        }

        let c_str: *const std::os::raw::c_char = msg_send![ns_name, UTF8String];
        if c_str.is_null() {
            return None;
        }
        let name = CStr::from_ptr(c_str).to_string_lossy().into_owned();

        let icon: id = msg_send![app, icon];
        let icon_png_base64 = if icon.is_null() {
            None
        } else {
            nsimage_to_png_base64(icon)
        };

        if icon_png_base64.is_none() {
            log::debug!("前台应用 {} 的图标渲染失败，仅返回名称", name);
        }

        Some(FocusedApp {
            name,
            icon_png_base64,
        })
    }
}

#[cfg(not(target_os = "macos"))]
pub fn get_focused_app() -> Option<FocusedApp> {
    log::debug!("非 macOS 平台不提供前台应用查询");
    None
}

/// 将 NSImage 渲染为固定尺寸 PNG 并编码为 Base64。
#[cfg(target_os = "macos")]
fn nsimage_to_png_base64(image: cocoa::base::id) -> Option<String> {
    use cocoa::base::{id, nil};
    use cocoa::foundation::NSSize;
    use objc::{class, msg_send, sel, sel_impl};

    unsafe {
        let _: () = msg_send![image, setSize: NSSize::new(ICON_POINT_SIZE, ICON_POINT_SIZE)];

        let tiff: id = msg_send![image, TIFFRepresentation];
        if tiff.is_null() {
            return None;
        }

        let rep: id = msg_send![class!(NSBitmapImageRep), imageRepWithData: tiff];
        if rep.is_null() {
            return None;
        }

        // NSBitmapImageFileTypePNG == 4
        let png: id = msg_send![rep, representationUsingType: 4u64 properties: nil];
        if png.is_null() {
            return None;
        }

        let len: usize = msg_send![png, length];
        let bytes: *const std::os::raw::c_void = msg_send![png, bytes];
        if bytes.is_null() || len == 0 {
            return None;
        }

        let slice = std::slice::from_raw_parts(bytes as *const u8, len);
        Some(general_purpose::STANDARD.encode(slice))
    }
}

/// 查询前台应用信息。
///
/// 任何缺失数据都折叠为空结果，不向前端报错。
#[tauri::command]
pub fn get_focused_app_info() -> Option<FocusedApp> {
    get_focused_app()
}
