//! # 采样配置模块
//!
//! ## 设计思路
//!
//! 将“可调策略”集中到 `SamplerConfig`：工作分辨率决定计算上界，
//! 滤镜决定降采样质量。默认值即生产值，运行时可通过命令层调整。
//!
//! ## 实现思路
//!
//! - `Default` 提供固定 150×150 工作分辨率与双线性滤镜。
//! - 工作分辨率调整必须经过 `apply_sample_dimension` 校验，
//!   保证“计算成本有界”的核心约束不被放宽到失控。
//! - 滤镜名解析与反向输出成对出现，供前端展示当前状态。

use image::imageops::FilterType;

use super::SamplerError;

/// 默认工作分辨率（单边像素数）。
///
/// 任意尺寸的壁纸都会先缩到该分辨率再做均值，计算成本因此有界。
pub const DEFAULT_SAMPLE_DIMENSION: u32 = 150;

/// 工作分辨率允许的调整区间。
pub const MIN_SAMPLE_DIMENSION: u32 = 16;
pub const MAX_SAMPLE_DIMENSION: u32 = 512;

/// 取色采样配置。
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// 降采样目标分辨率（正方形单边，像素）。
    pub sample_dimension: u32,
    /// 降采样滤镜策略。
    pub resize_filter: FilterType,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_dimension: DEFAULT_SAMPLE_DIMENSION,
            resize_filter: FilterType::Triangle,
        }
    }
}

impl SamplerConfig {
    /// 设置工作分辨率，越界时拒绝。
    ///
    /// # 示例
    /// ```rust
    /// use jaybar::sampler::SamplerConfig;
    ///
    /// let mut config = SamplerConfig::default();
    /// config.apply_sample_dimension(64)?;
    /// assert_eq!(config.sample_dimension, 64);
    /// # Ok::<(), jaybar::sampler::SamplerError>(())
    /// ```
    pub fn apply_sample_dimension(&mut self, dimension: u32) -> Result<(), SamplerError> {
        if !(MIN_SAMPLE_DIMENSION..=MAX_SAMPLE_DIMENSION).contains(&dimension) {
            return Err(SamplerError::InvalidConfig(format!(
                "工作分辨率必须在 {}~{} 像素之间：{}",
                MIN_SAMPLE_DIMENSION, MAX_SAMPLE_DIMENSION, dimension
            )));
        }

        self.sample_dimension = dimension;
        Ok(())
    }

    /// 从外部字符串解析滤镜策略。
    pub fn parse_filter(name: &str) -> Result<FilterType, SamplerError> {
        match name.trim().to_lowercase().as_str() {
            "nearest" => Ok(FilterType::Nearest),
            "bilinear" => Ok(FilterType::Triangle),
            "catmullrom" => Ok(FilterType::CatmullRom),
            "gaussian" => Ok(FilterType::Gaussian),
            "lanczos3" => Ok(FilterType::Lanczos3),
            other => Err(SamplerError::InvalidConfig(format!(
                "未知滤镜策略：{}（可选：nearest / bilinear / catmullrom / gaussian / lanczos3）",
                other
            ))),
        }
    }

    /// 将滤镜策略输出为稳定字符串，供前端展示与持久化。
    pub fn filter_name(&self) -> &'static str {
        match self.resize_filter {
            FilterType::Nearest => "nearest",
            FilterType::Triangle => "bilinear",
            FilterType::CatmullRom => "catmullrom",
            FilterType::Gaussian => "gaussian",
            FilterType::Lanczos3 => "lanczos3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_working_resolution() {
        let config = SamplerConfig::default();
        assert_eq!(config.sample_dimension, 150);
        assert_eq!(config.filter_name(), "bilinear");
    }

    #[test]
    fn apply_sample_dimension_accepts_range_bounds() {
        let mut config = SamplerConfig::default();

        config.apply_sample_dimension(MIN_SAMPLE_DIMENSION).expect("min bound should be accepted");
        assert_eq!(config.sample_dimension, MIN_SAMPLE_DIMENSION);

        config.apply_sample_dimension(MAX_SAMPLE_DIMENSION).expect("max bound should be accepted");
        assert_eq!(config.sample_dimension, MAX_SAMPLE_DIMENSION);
    }

    #[test]
    fn apply_sample_dimension_rejects_out_of_range() {
        let mut config = SamplerConfig::default();

        assert!(matches!(
            config.apply_sample_dimension(0),
            Err(SamplerError::InvalidConfig(_))
        ));
        assert!(matches!(
            config.apply_sample_dimension(MIN_SAMPLE_DIMENSION - 1),
            Err(SamplerError::InvalidConfig(_))
        ));
        assert!(matches!(
            config.apply_sample_dimension(MAX_SAMPLE_DIMENSION + 1),
            Err(SamplerError::InvalidConfig(_))
        ));

        assert_eq!(config.sample_dimension, DEFAULT_SAMPLE_DIMENSION);
    }

    #[test]
    fn filter_name_roundtrip() {
        for name in ["nearest", "bilinear", "catmullrom", "gaussian", "lanczos3"] {
            let filter = SamplerConfig::parse_filter(name).expect("parse filter should succeed");
            let config = SamplerConfig {
                resize_filter: filter,
                ..SamplerConfig::default()
            };
            assert_eq!(config.filter_name(), name);
        }
    }

    #[test]
    fn parse_filter_rejects_unknown_name() {
        assert!(matches!(
            SamplerConfig::parse_filter("bicubic"),
            Err(SamplerError::InvalidConfig(_))
        ));
    }
}
