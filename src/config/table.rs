// src/config/table.rs

use serde::{Deserialize, Serialize};

use crate::config::fan::FanConfig;
use crate::config::layout::*;
use crate::config::{non_negative, positive, require};
use crate::error::ConfigError;

/// カメラの設定。`PerspectiveProjector` に渡すよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub fov_y_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { distance: CAMERA_DISTANCE, fov_y_deg: CAMERA_FOV_Y_DEG }
    }
}

/// テーブル全体の設定。足りない項目は layout.rs の定数で埋まる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub hand: FanConfig,
    pub desk_spacing: f32,
    pub mouse_y_rate: f32,
    pub hover_scale: f32,
    pub pickup_lift: f32,
    pub camera: CameraConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            hand: FanConfig::world(),
            desk_spacing: DESK_SPACING,
            mouse_y_rate: HAND_ZONE_RATE,
            hover_scale: HOVER_SCALE,
            pickup_lift: PICKUP_LIFT,
            camera: CameraConfig::default(),
        }
    }
}

impl TableConfig {
    /// JSON から読み込む。読めた後で `validate` も通す。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hand.validate()?;
        positive("desk_spacing", self.desk_spacing)?;
        require(
            (0.0..=1.0).contains(&self.mouse_y_rate),
            "mouse_y_rate",
            "must be between 0 and 1",
        )?;
        positive("hover_scale", self.hover_scale)?;
        non_negative("pickup_lift", self.pickup_lift)?;
        positive("camera.distance", self.camera.distance)?;
        require(
            self.camera.fov_y_deg > 0.0 && self.camera.fov_y_deg < 180.0,
            "camera.fov_y_deg",
            "must be between 0 and 180 degrees",
        )
    }
}
