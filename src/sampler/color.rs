//! # 颜色模型模块
//!
//! ## 设计思路
//!
//! 用最小值对象承载 RGB 三通道，规范文本形式固定为 `#RRGGBB`（大写、补零）。
//! IPC 序列化直接输出规范文本，前端无需再做格式转换。

use serde::{Serialize, Serializer};

/// 不可变 RGB 颜色（每通道 0~255）。
///
/// 不携带 alpha 通道：取色结果用于不透明的桌面合成背景。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 输出规范文本形式 `#RRGGBB`。
    ///
    /// # 示例
    /// ```rust
    /// use jaybar::sampler::Color;
    ///
    /// assert_eq!(Color::new(255, 0, 0).to_hex(), "#FF0000");
    /// assert_eq!(Color::new(196, 150, 217).to_hex(), "#C496D9");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Tauri IPC 中颜色以规范文本传输，而非结构体字段。
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        assert_eq!(Color::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Color::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::new(255, 255, 255).to_hex(), "#FFFFFF");
        assert_eq!(Color::new(10, 171, 205).to_hex(), "#0AABCD");
    }

    #[test]
    fn display_matches_hex() {
        let color = Color::new(127, 127, 127);
        assert_eq!(format!("{}", color), "#7F7F7F");
        assert_eq!(color.to_string(), color.to_hex());
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(196, 150, 217)).expect("serialize color failed");
        assert_eq!(json, "\"#C496D9\"");
    }
}
