//! # 服务层（可注入状态）
//!
//! ## 设计思路
//!
//! 使用 `WallpaperServiceState` 作为 Tauri 注入状态，承载运行时可调的
//! 采样配置。好处：
//! 1. 生命周期清晰（由 `main.rs` 统一管理）
//! 2. 测试可创建独立实例，减少共享状态副作用
//! 3. 单次取色使用“同一配置快照”，避免处理中途配置漂移
//!
//! ## 实现思路
//!
//! 对外仅暴露少量稳定 API：
//! - `config_snapshot`：读取当前配置副本
//! - `set_sampler_config` / `get_sampler_config`：命令层的校验入口

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::sampler::SamplerConfig;

use super::WallpaperError;

/// 采样配置的 IPC 载荷形式。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfigPayload {
    pub sample_dimension: u32,
    pub resize_filter: String,
}

/// 壁纸取色服务状态。
///
/// 作为 Tauri `State` 注入到命令层，内部持有采样配置。
pub struct WallpaperServiceState {
    config: RwLock<SamplerConfig>,
}

impl WallpaperServiceState {
    /// 使用默认配置创建服务状态。
    ///
    /// # 示例
    /// ```rust
    /// use jaybar::wallpaper::WallpaperServiceState;
    ///
    /// let service = WallpaperServiceState::new();
    /// let config = service.config_snapshot().expect("fresh state is never poisoned");
    /// assert_eq!(config.sample_dimension, 150);
    /// ```
    pub fn new() -> Self {
        Self::with_config(SamplerConfig::default())
    }

    /// 使用自定义配置创建服务状态，主要用于测试。
    pub fn with_config(config: SamplerConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// 获取配置快照。
    ///
    /// 作用：保证单次取色链路使用一致参数。
    pub fn config_snapshot(&self) -> Result<SamplerConfig, WallpaperError> {
        self.config
            .read()
            .map(|cfg| cfg.clone())
            .map_err(|_| WallpaperError::ResourceLimit("配置读取锁已中毒".to_string()))
    }

    /// 应用新的采样配置，越界或未知滤镜时拒绝。
    pub fn set_sampler_config(&self, payload: SamplerConfigPayload) -> Result<(), AppError> {
        let filter = SamplerConfig::parse_filter(&payload.resize_filter)?;

        let mut updated = self.config_snapshot()?;
        updated.apply_sample_dimension(payload.sample_dimension)?;
        updated.resize_filter = filter;

        let mut config = self
            .config
            .write()
            .map_err(|_| WallpaperError::ResourceLimit("配置写入锁已中毒".to_string()))?;
        *config = updated;

        log::info!(
            "⚙️ 已更新采样配置：dimension={} filter={}",
            config.sample_dimension,
            config.filter_name()
        );

        Ok(())
    }

    /// 读取当前生效配置（IPC 载荷形式）。
    pub fn get_sampler_config(&self) -> Result<SamplerConfigPayload, AppError> {
        let config = self.config_snapshot()?;
        Ok(SamplerConfigPayload {
            sample_dimension: config.sample_dimension,
            resize_filter: config.filter_name().to_string(),
        })
    }
}

impl Default for WallpaperServiceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn service_set_and_get_config_roundtrip() {
        let service = WallpaperServiceState::new();

        service
            .set_sampler_config(SamplerConfigPayload {
                sample_dimension: 64,
                resize_filter: "lanczos3".to_string(),
            })
            .expect("set config should succeed");

        let payload = service.get_sampler_config().expect("get config should succeed");
        assert_eq!(payload.sample_dimension, 64);
        assert_eq!(payload.resize_filter, "lanczos3");
    }

    #[test]
    fn service_rejects_out_of_range_dimension() {
        let service = WallpaperServiceState::new();

        let result = service.set_sampler_config(SamplerConfigPayload {
            sample_dimension: 4096,
            resize_filter: "bilinear".to_string(),
        });
        assert!(result.is_err());

        // 被拒绝的写入不应污染已有配置
        let payload = service.get_sampler_config().expect("get config should succeed");
        assert_eq!(payload.sample_dimension, 150);
    }

    #[test]
    fn service_rejects_unknown_filter() {
        let service = WallpaperServiceState::new();

        let result = service.set_sampler_config(SamplerConfigPayload {
            sample_dimension: 150,
            resize_filter: "mystery".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn service_config_concurrent_access_stress() {
        let service = Arc::new(WallpaperServiceState::new());

        let workers = 8;
        let iterations = 200;
        let dimensions = [32u32, 64, 150, 300];
        let filters = ["nearest", "bilinear", "catmullrom", "lanczos3"];

        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let service = Arc::clone(&service);
            handles.push(thread::spawn(move || {
                for i in 0..iterations {
                    let payload = SamplerConfigPayload {
                        sample_dimension: dimensions[(worker_id + i) % dimensions.len()],
                        resize_filter: filters[(worker_id + i) % filters.len()].to_string(),
                    };
                    service.set_sampler_config(payload).expect("set config should succeed");

                    let current = service.get_sampler_config().expect("get config should succeed");
                    assert!(dimensions.contains(&current.sample_dimension));
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread should not panic");
        }
    }
}
