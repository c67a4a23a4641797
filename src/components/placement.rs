// src/components/placement.rs

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// テーブルローカル座標の 3D ベクトルだよ！📍
///
/// x が右、y が画面の奥 (上) 方向、z が深さ (マイナスがカメラ寄り)。
/// 回転 (オイラー角、度数) を入れるのにもこれを使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// 位置 + 回転のセット。レイアウト計算の結果はいつもこれ！
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    /// オイラー角 (度)。扇形レイアウトでは z 成分だけが 0 以外になる。
    pub rotation: Vec3,
}

impl Placement {
    pub const fn at(position: Vec3) -> Self {
        Self { position, rotation: Vec3::ZERO }
    }
}
