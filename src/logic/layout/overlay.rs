// src/logic/layout/overlay.rs

use serde::{Deserialize, Serialize};

use crate::components::placement::{Placement, Vec3};
use crate::config::fan::FanConfig;
use crate::config::layout::OVERLAY_CENTER_SPACING_RATE;
use crate::error::LayoutError;
use crate::logic::layout::{hand_fan_placement, row_offset};

/// 2D オーバーレイ (スクリーン座標) 用のレイアウト計算。
/// 画面サイズが変わったら作り直してね。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayout {
    pub width: f32,
    pub height: f32,
}

impl OverlayLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// 画面下の手札の扇。
    pub fn hand(&self, index: usize, count: usize) -> Result<Placement, LayoutError> {
        hand_fan_placement(&FanConfig::screen(self.width, self.height), count, index)
    }

    /// 画面中央に横一列で並べる (初期手札の入れ替えとかで見せる用)。
    pub fn center(&self, index: usize, count: usize) -> Result<Placement, LayoutError> {
        let spacing = self.height * OVERLAY_CENTER_SPACING_RATE;
        let x = self.width / 2.0 + row_offset(spacing, count, index)?;
        Ok(Placement::at(Vec3::new(x, self.height / 2.0, 0.0)))
    }

    /// 山札の置き場所 (画面右端)。
    pub fn stack_position(&self) -> Vec3 {
        Vec3::new(self.width, 0.0, 0.0)
    }
}
