//! # 壁纸链路错误模型
//!
//! ## 设计思路
//!
//! 壁纸查询对前端只有一种失败形态：没有结果。内部仍按来源区分错误，
//! 便于日志定位是“找不到壁纸文件”“解码失败”还是“资源超限”。
//! 该类型不会跨越查询命令边界——命令层把所有分支折叠为 `None`。

/// 壁纸解码链路的统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum WallpaperError {
    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
