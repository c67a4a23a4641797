// src/logic/layout/tests.rs
//! レイアウトエンジンのユニットテスト。

use super::*;
use crate::components::placement::Vec3;
use crate::config::fan::FanConfig;
use crate::config::layout::DESK_SPACING;
use crate::error::LayoutError;
use rand::{rngs::StdRng, Rng, SeedableRng};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn hand_xs(count: usize) -> Vec<f32> {
    let fan = FanConfig::world();
    (0..count)
        .map(|i| hand_fan_placement(&fan, count, i).unwrap().position.x)
        .collect()
}

// --- 範囲外チェック ---

#[test]
fn every_layout_rejects_index_at_or_past_count() {
    let fan = FanConfig::world();
    assert_eq!(
        hand_fan_placement(&fan, 3, 3),
        Err(LayoutError::IndexOutOfRange { index: 3, count: 3 })
    );
    assert_eq!(
        hand_fan_placement(&fan, 6, 9),
        Err(LayoutError::IndexOutOfRange { index: 9, count: 6 })
    );
    assert_eq!(
        desk_row_position(DESK_SPACING, 0, 0),
        Err(LayoutError::IndexOutOfRange { index: 0, count: 0 })
    );
    let overlay = OverlayLayout::new(1280.0, 720.0);
    assert!(overlay.hand(2, 2).is_err());
    assert!(overlay.center(5, 1).is_err());
}

// --- 手札: 一列モード ---

#[test]
fn two_and_three_cards_sit_in_a_flat_row() {
    let two = hand_xs(2);
    assert!(approx(two[0], -0.25) && approx(two[1], 0.25), "2 枚: {:?}", two);

    let three = hand_xs(3);
    assert!(approx(three[0], -0.5) && approx(three[1], 0.0) && approx(three[2], 0.5), "3 枚: {:?}", three);

    let fan = FanConfig::world();
    for i in 0..3 {
        let p = hand_fan_placement(&fan, 3, i).unwrap();
        assert_eq!(p.rotation, Vec3::ZERO);
        assert_eq!(p.position.y, fan.origin.y);
        assert_eq!(p.position.z, fan.origin.z);
    }
    println!("一列モードのテスト、成功！🎉");
}

#[test]
fn single_card_is_centred() {
    let p = hand_fan_placement(&FanConfig::world(), 1, 0).unwrap();
    assert!(approx(p.position.x, 0.0));
    assert_eq!(p.rotation, Vec3::ZERO);
}

// --- 手札: 扇モード ---

#[test]
fn fourth_card_switches_to_the_arc() {
    let fan = FanConfig::world();
    let placements: Vec<_> = (0..4).map(|i| hand_fan_placement(&fan, 4, i).unwrap()).collect();

    assert!(approx(placements[0].rotation.z, 15.0));
    assert!(approx(placements[1].rotation.z, 5.0));
    assert!(approx(placements[2].rotation.z, -5.0));
    assert!(approx(placements[3].rotation.z, -15.0));
    for p in &placements {
        assert_eq!(p.rotation.x, 0.0);
        assert_eq!(p.rotation.y, 0.0);
        assert!(p.rotation.z != 0.0, "偶数枚ではどのカードも傾いてるはず");
    }

    // 外側のカードほど下がる
    assert!(placements[0].position.y < placements[1].position.y);
    assert!(approx(placements[0].position.y, placements[3].position.y));
    // 右のカードほど手前
    assert!(placements[3].position.z < placements[0].position.z);
}

#[test]
fn only_the_exact_centre_of_an_odd_hand_is_upright() {
    let fan = FanConfig::world();
    for i in 0..5 {
        let p = hand_fan_placement(&fan, 5, i).unwrap();
        if i == 2 {
            assert_eq!(p.rotation.z, 0.0);
            assert!(approx(p.position.x, 0.0));
            assert!(approx(p.position.y, fan.origin.y));
        } else {
            assert!(p.rotation.z.abs() >= 10.0 - EPSILON);
        }
    }
}

#[test]
fn arc_widens_as_the_hand_grows() {
    let span = |count: usize| {
        let xs = hand_xs(count);
        xs[count - 1] - xs[0]
    };
    assert!(span(5) > span(4));
    assert!(span(9) > span(5));
}

#[test]
fn hand_is_mirror_symmetric_in_both_regimes() {
    let fan = FanConfig::world();
    for count in 1..=12 {
        for index in 0..count {
            let a = hand_fan_placement(&fan, count, index).unwrap();
            let b = hand_fan_placement(&fan, count, count - 1 - index).unwrap();
            assert!(approx(a.position.x, -b.position.x), "count={} index={}", count, index);
            assert!(approx(a.position.y, b.position.y), "count={} index={}", count, index);
            assert!(approx(a.rotation.z, -b.rotation.z), "count={} index={}", count, index);
        }
    }
}

#[test]
fn hand_and_desk_rows_are_centred() {
    let fan = FanConfig::world();
    for count in 1..=12 {
        let hand_sum: f32 = (0..count)
            .map(|i| hand_fan_placement(&fan, count, i).unwrap().position.x)
            .sum();
        let desk_sum: f32 = (0..count)
            .map(|i| desk_row_position(DESK_SPACING, count, i).unwrap().x)
            .sum();
        assert!(approx(hand_sum / count as f32, 0.0), "hand count={}", count);
        assert!(approx(desk_sum / count as f32, 0.0), "desk count={}", count);
    }
}

#[test]
fn screen_frame_fan_is_symmetric_about_the_screen_centre() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let width = rng.gen_range(640.0..2560.0_f32);
        let height = rng.gen_range(360.0..1440.0_f32);
        let count = rng.gen_range(1..10_usize);
        let index = rng.gen_range(0..count);

        let overlay = OverlayLayout::new(width, height);
        let a = overlay.hand(index, count).unwrap();
        let b = overlay.hand(count - 1 - index, count).unwrap();
        let centre = width / 2.0;
        let tolerance = height * 1e-5;
        assert!(((a.position.x - centre) + (b.position.x - centre)).abs() < tolerance);
        assert!((a.position.y - b.position.y).abs() < tolerance);
        assert!((a.rotation.z + b.rotation.z).abs() < EPSILON);
    }
}

#[test]
fn screen_and_world_fans_bend_the_same_way() {
    let world = FanConfig::world();
    let overlay = OverlayLayout::new(1920.0, 1080.0);
    for count in 1..=8 {
        for index in 0..count {
            let w = hand_fan_placement(&world, count, index).unwrap();
            let s = overlay.hand(index, count).unwrap();
            assert_eq!(w.rotation, s.rotation, "count={} index={}", count, index);
        }
    }
}

// --- デスク ---

#[test]
fn desk_row_places_a_lone_entity_at_zero() {
    assert_eq!(desk_row_position(DESK_SPACING, 1, 0).unwrap(), Vec3::ZERO);
}

#[test]
fn desk_row_steps_by_spacing() {
    let xs: Vec<f32> = (0..4).map(|i| desk_row_position(DESK_SPACING, 4, i).unwrap().x).collect();
    assert_eq!(xs, vec![-1.5, -0.5, 0.5, 1.5]);
}

// --- オーバーレイ ---

#[test]
fn overlay_centre_row_and_stack_anchor() {
    let overlay = OverlayLayout::new(1000.0, 500.0);
    let middle = overlay.center(1, 3).unwrap();
    assert!(approx(middle.position.x, 500.0));
    assert!(approx(middle.position.y, 250.0));
    let left = overlay.center(0, 3).unwrap();
    assert!(approx(left.position.x, 400.0));
    assert_eq!(overlay.stack_position(), Vec3::new(1000.0, 0.0, 0.0));
}
