//! # jaybar — macOS 刘海栏小组件后端
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     前端（小组件 UI）                     │
//! │                                                          │
//! │   壁纸强调色 ── 前台应用展示 ── 刘海布局 ── 设置面板       │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ Tauri IPC（查询缺省返回 null，环境命令返回 AppError）
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            后端 (Rust)                           │
//! │                                                          │
//! │  ┌─ error ───────── AppError（统一错误类型）              │
//! │  │                                                       │
//! │  ├─ sampler ─────── 主导色算法（纯函数：降采样 + 均值）     │
//! │  │                                                       │
//! │  ├─ wallpaper ───── 壁纸定位·解码·取色编排·采样配置        │
//! │  │                                                       │
//! │  ├─ focus ───────── 前台应用名称 + PNG 图标               │
//! │  │                                                       │
//! │  ├─ window_chrome ─ 窗口样式（无边框/透明/浮动）·刘海几何   │
//! │  └─ settings ────── 设置 JSON 持久化                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，环境类 Tauri command 的返回类型 |
//! | [`sampler`] | 壁纸主导色算法：固定工作分辨率降采样 + 逐通道算术均值 |
//! | [`wallpaper`] | NSWorkspace 壁纸定位、受限解码、取色链路编排与配置 |
//! | [`focus`] | 前台应用查询：本地化名称 + 渲染为 PNG 的图标 |
//! | [`window_chrome`] | 小组件窗口样式（幂等应用）与刘海几何/摆放 |
//! | [`settings`] | 小组件设置的 JSON 读写 |
//!
//! ## 失败哲学
//!
//! 三条宿主查询（壁纸色 / 前台应用 / 刘海信息）都是“尽力而为”：
//! 失败统一折叠为空结果或零值，由前端以文档化的默认值兜底，
//! 不区分失败原因、不重试、不缓存。

pub mod error;
pub mod focus;
pub mod sampler;
pub mod settings;
pub mod wallpaper;
pub mod window_chrome;
