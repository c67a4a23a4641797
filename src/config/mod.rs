// src/config/mod.rs
//! 設定まわり。定数は layout.rs、まとめて差し替えたい時は `TableConfig`。

pub mod fan;
pub mod layout;
pub mod table;

pub use fan::FanConfig;
pub use table::{CameraConfig, TableConfig};

use crate::error::ConfigError;

pub(crate) fn require(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}

pub(crate) fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    require(value.is_finite() && value > 0.0, field, "must be a positive finite number")
}

pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    require(value.is_finite() && value >= 0.0, field, "must be a finite number >= 0")
}

pub(crate) fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    require(value.is_finite(), field, "must be finite")
}
