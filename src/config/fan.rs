// src/config/fan.rs

use serde::{Deserialize, Serialize};

use crate::components::placement::Vec3;
use crate::config::layout::*;
use crate::config::{finite, non_negative, positive, require};
use crate::error::ConfigError;

/// 手札の扇レイアウトのパラメータ。
///
/// 3D のテーブル座標用と 2D のオーバーレイ (スクリーン座標) 用で、
/// 同じアルゴリズムを定数だけ変えて使い回すためのものだよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    /// 扇の中心。x は左右の中心、y/z は真ん中のカードの高さと深さ。
    pub origin: Vec3,
    pub spacing: f32,
    pub max_width: f32,
    /// 4 枚目以降、1 枚増えるごとに扇が広がる幅
    pub growth: f32,
    pub half_height: f32,
    pub depth_step: f32,
    pub flat_limit: usize,
    pub step_deg: f32,
    pub drop_factor: f32,
}

impl FanConfig {
    /// テーブルローカル座標 (ゲームプレイ画面) の扇。
    pub fn world() -> Self {
        Self {
            origin: Vec3::new(HAND_ORIGIN_X, HAND_ORIGIN_Y, HAND_ORIGIN_Z),
            spacing: HAND_SPACING,
            max_width: HAND_MAX_WIDTH,
            growth: HAND_SPACING * FAN_GROWTH_RATIO,
            half_height: CARD_HALF_HEIGHT,
            depth_step: HAND_DEPTH_STEP,
            flat_limit: FAN_FLAT_LIMIT,
            step_deg: FAN_STEP_DEG,
            drop_factor: FAN_DROP_FACTOR,
        }
    }

    /// スクリーン座標 (オーバーレイ) の扇。サイズは全部画面の高さから決まる。
    pub fn screen(width: f32, height: f32) -> Self {
        let spacing = height * OVERLAY_HAND_SPACING_RATE;
        Self {
            origin: Vec3::new(width / 2.0, height * OVERLAY_HAND_BASE_Y_RATE, 0.0),
            spacing,
            max_width: height * OVERLAY_MAX_HAND_WIDTH_RATE,
            growth: spacing * FAN_GROWTH_RATIO,
            half_height: height * OVERLAY_CARD_HALF_HEIGHT_RATE,
            depth_step: 0.0,
            flat_limit: FAN_FLAT_LIMIT,
            step_deg: FAN_STEP_DEG,
            drop_factor: FAN_DROP_FACTOR,
        }
    }
}

impl FanConfig {
    /// 扇を計算できる値かチェック。`flat_limit` が 0 だと 1 枚の時に 0 除算になる。
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("hand.origin.x", self.origin.x)?;
        finite("hand.origin.y", self.origin.y)?;
        finite("hand.origin.z", self.origin.z)?;
        positive("hand.spacing", self.spacing)?;
        positive("hand.max_width", self.max_width)?;
        non_negative("hand.growth", self.growth)?;
        positive("hand.half_height", self.half_height)?;
        non_negative("hand.depth_step", self.depth_step)?;
        require(self.flat_limit >= 1, "hand.flat_limit", "must be at least 1")?;
        finite("hand.step_deg", self.step_deg)?;
        finite("hand.drop_factor", self.drop_factor)
    }
}

impl Default for FanConfig {
    fn default() -> Self {
        Self::world()
    }
}
