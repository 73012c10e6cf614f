//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，所有需要向前端报错的
//! `#[tauri::command]` 函数统一返回 `Result<T, AppError>`。
//!
//! 注意与三条查询命令的关系：壁纸取色与前台应用查询遵循
//! “失败即缺省”的契约，它们向前端返回 `None` 而不是错误；
//! `AppError` 只覆盖配置校验、设置持久化与窗口样式这些环境层面。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为子模块错误提供 `From` 转换，无需手动 map。
//! - 实现 `Serialize` 将错误序列化为字符串，满足 Tauri IPC 要求。

use serde::Serialize;

use crate::sampler::SamplerError;
use crate::wallpaper::WallpaperError;

/// 应用级统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 窗口样式操作失败
    #[error("窗口操作失败: {0}")]
    Window(String),

    /// 设置文件读写失败
    #[error("设置存储失败: {0}")]
    Storage(String),

    /// 采样配置校验失败
    #[error("{0}")]
    Sampler(#[from] SamplerError),

    /// 壁纸查询链路错误（仅用于日志与内部传递，查询命令本身不外抛）
    #[error("{0}")]
    Wallpaper(#[from] WallpaperError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

/// Tauri IPC 要求返回值实现 `Serialize`。
/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
