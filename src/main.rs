//! # jaybar — 应用入口
//!
//! 本文件仅负责应用初始化与状态/命令注册。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use jaybar::{focus, settings, wallpaper, window_chrome};
use tauri::Manager;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .setup(|app| {
            log::info!("setup: begin");

            // 注册壁纸取色服务状态
            app.manage(wallpaper::WallpaperServiceState::new());
            log::info!("setup: wallpaper service managed");

            // 应用小组件窗口样式（setup 钩子运行在主线程）
            if let Some(main_window) = app.get_webview_window("main") {
                if let Err(err) = window_chrome::apply_widget_chrome(&main_window) {
                    log::error!("setup: 窗口样式应用失败，小组件将以默认样式运行: {err}");
                }
            } else {
                log::error!("setup: 未找到主窗口，跳过样式设置");
            }

            log::info!("setup: complete");
            Ok(())
        })
        // 注册所有 Tauri 命令
        .invoke_handler(tauri::generate_handler![
            // 壁纸取色
            wallpaper::commands::get_wallpaper_color,
            wallpaper::commands::get_fallback_color,
            wallpaper::commands::set_sampler_config,
            wallpaper::commands::get_sampler_config,
            // 前台应用
            focus::get_focused_app_info,
            // 窗口样式与刘海
            window_chrome::set_window_collection_behavior,
            window_chrome::notch::get_notch_info,
            window_chrome::notch::position_at_notch,
            // 应用设置存储
            settings::get_app_settings,
            settings::set_app_settings,
        ])
        .run(tauri::generate_context!())
        .expect("运行 Tauri 应用时出错");
}
