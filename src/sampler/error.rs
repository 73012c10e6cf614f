//! # 采样错误模型
//!
//! ## 设计思路
//!
//! 采样函数对外只返回“有色/无色”，错误枚举仅服务内部阶段与配置校验：
//! 配置越界需要给前端可读的拒绝理由，降采样失败需要可诊断的日志。

/// 采样器内部统一错误类型。
///
/// 注意：`sample` 的公开契约是 `Option<Color>`，该类型不会跨越取色查询边界；
/// 只有配置命令会把它上转为 `AppError` 透传给前端。
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    #[error("配置错误：{0}")]
    InvalidConfig(String),

    #[error("降采样错误：{0}")]
    Resample(String),
}
