//! 小组件设置持久化模块
//!
//! 设置以 JSON 文档整体读写，后端不解释具体字段——布局、主题等
//! 语义都属于前端；这里只保证“是个 JSON 对象”并完整落盘。
//! 写入走“临时文件 + 重命名”，进程中途退出不会留下半截文件。

use std::fs;
use std::path::PathBuf;

use tauri::{AppHandle, Manager};

use crate::error::AppError;

const SETTINGS_FILE: &str = "settings.json";

fn settings_file_path(app: &AppHandle) -> Result<PathBuf, AppError> {
    let app_data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| AppError::Storage(format!("获取应用数据目录失败: {}", e)))?;

    fs::create_dir_all(&app_data_dir)
        .map_err(|e| AppError::Storage(format!("创建应用数据目录失败: {}", e)))?;

    Ok(app_data_dir.join(SETTINGS_FILE))
}

/// 读取小组件设置，尚未写入过时返回空。
#[tauri::command]
pub fn get_app_settings(app: AppHandle) -> Result<Option<serde_json::Value>, AppError> {
    let settings_path = settings_file_path(&app)?;
    if !settings_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&settings_path)?;
    let parsed = serde_json::from_str::<serde_json::Value>(&content)
        .map_err(|e| AppError::Storage(format!("解析设置文件失败: {}", e)))?;

    Ok(Some(parsed))
}

/// 整体覆盖写入小组件设置。
#[tauri::command]
pub fn set_app_settings(app: AppHandle, settings: serde_json::Value) -> Result<(), AppError> {
    if !settings.is_object() {
        return Err(AppError::Storage("设置必须是 JSON 对象".to_string()));
    }

    let settings_path = settings_file_path(&app)?;
    let content = serde_json::to_string_pretty(&settings)
        .map_err(|e| AppError::Storage(format!("序列化设置失败: {}", e)))?;

    let tmp_path = settings_path.with_extension("json.tmp");
    fs::write(&tmp_path, content)?;
    fs::rename(&tmp_path, &settings_path)?;
    Ok(())
}
