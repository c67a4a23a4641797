// src/logic/layout/hand_fan.rs

use crate::components::placement::{Placement, Vec3};
use crate::config::fan::FanConfig;
use crate::error::LayoutError;
use crate::logic::layout::{check_slot, row_offset};

/// 手札 `count` 枚のうち `index` 番目のカードの配置を計算するよ！🃏
///
/// * `count <= flat_limit`: 回転なしの一列。少ない枚数で無理に扇にしない。
/// * それより多い時: 扇形。真ん中のカードを軸に 1 枚ごとに `step_deg` ずつ傾けて、
///   外側ほど下げる。x には `half_height * sin(deg)` を足して、カードの下端じゃなくて
///   回転軸 (中心) が弧に乗るようにしてる。
pub fn hand_fan_placement(fan: &FanConfig, count: usize, index: usize) -> Result<Placement, LayoutError> {
    check_slot(count, index)?;

    if count <= fan.flat_limit {
        let x = fan.origin.x + row_offset(fan.spacing, count, index)?;
        return Ok(Placement::at(Vec3::new(x, fan.origin.y, fan.origin.z)));
    }

    let last = (count - 1) as f32;
    let width = fan.max_width + fan.growth * (count - fan.flat_limit) as f32;
    let step = width / last;
    let deg = (last / 2.0 - index as f32) * fan.step_deg;
    let rad = deg.to_radians();

    let position = Vec3::new(
        fan.origin.x + step * index as f32 - width / 2.0 + fan.half_height * rad.sin(),
        fan.origin.y - fan.half_height * (1.0 - rad.cos()) * fan.drop_factor,
        fan.origin.z - fan.depth_step * index as f32,
    );

    Ok(Placement { position, rotation: Vec3::new(0.0, 0.0, deg) })
}
