// src/bridge/projector.rs

use crate::components::placement::Vec3;
use crate::config::table::CameraConfig;
use crate::input::pointer::{ScreenPoint, Viewport};

/// スクリーン上の点を、テーブル平面上のローカル座標に変換する。
/// 同じ点 + 同じカメラなら必ず同じ結果を返すこと。
pub trait Projector {
    fn project(&self, screen: ScreenPoint) -> Vec3;
}

impl<F> Projector for F
where
    F: Fn(ScreenPoint) -> Vec3,
{
    fn project(&self, screen: ScreenPoint) -> Vec3 {
        self(screen)
    }
}

/// テーブルを真正面から見下ろす透視カメラ。
///
/// 画面の中心が `table_origin` に写り、テーブル平面 (z = table_origin.z) までの距離が
/// `camera.distance`。
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveProjector {
    pub camera: CameraConfig,
    pub viewport: Viewport,
    pub table_origin: Vec3,
}

impl PerspectiveProjector {
    pub fn new(camera: CameraConfig, viewport: Viewport) -> Self {
        Self { camera, viewport, table_origin: Vec3::ZERO }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// 画面の縦半分がテーブル上で何ユニットになるか。
    fn half_extent_y(&self) -> f32 {
        self.camera.distance * (self.camera.fov_y_deg.to_radians() / 2.0).tan()
    }
}

impl Projector for PerspectiveProjector {
    fn project(&self, screen: ScreenPoint) -> Vec3 {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return self.table_origin;
        }
        let ndc_x = screen.x / self.viewport.width * 2.0 - 1.0;
        let ndc_y = screen.y / self.viewport.height * 2.0 - 1.0;
        let half_y = self.half_extent_y();
        let half_x = half_y * self.viewport.aspect();
        self.table_origin + Vec3::new(ndc_x * half_x, ndc_y * half_y, 0.0)
    }
}
