// src/input/pointer.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;

/// スクリーン座標の点 (ピクセル、原点は左下)。
///
/// ブラウザの clientY は上が 0 なので、ブリッジ側で `height - y` に直してから渡すこと！
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// ビューポートの大きさ (ピクセル)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

/// 1 tick 分のポインタの状態。tick の中ではこれを「今」として判断する。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSnapshot {
    pub position: ScreenPoint,
    pub viewport: Viewport,
}

impl PointerSnapshot {
    pub const fn new(position: ScreenPoint, viewport: Viewport) -> Self {
        Self { position, viewport }
    }

    /// ポインタが画面下の「手札エリア」にいるか。
    pub fn in_hand_zone(&self, mouse_y_rate: f32) -> bool {
        self.position.y < self.viewport.height * mouse_y_rate
    }
}

/// カードごとに届くポインタイベントの種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEventKind {
    HoverIn,
    HoverOut,
    Click,
    DragStart,
    Release,
}

/// どのカードに何が起きたか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub card: CardId,
    pub kind: PointerEventKind,
}

impl PointerEvent {
    pub const fn new(card: CardId, kind: PointerEventKind) -> Self {
        Self { card, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_zone_is_the_bottom_strip_of_the_viewport() {
        let viewport = Viewport::new(800.0, 600.0);
        let low = PointerSnapshot::new(ScreenPoint::new(400.0, 50.0), viewport);
        let just_above = PointerSnapshot::new(ScreenPoint::new(400.0, 91.0), viewport);
        let high = PointerSnapshot::new(ScreenPoint::new(400.0, 300.0), viewport);
        assert!(low.in_hand_zone(0.15));
        assert!(!just_above.in_hand_zone(0.15));
        assert!(!high.in_hand_zone(0.15));
    }

    #[test]
    fn event_kinds_use_snake_case_names() {
        let json = serde_json::to_string(&PointerEventKind::DragStart).unwrap();
        assert_eq!(json, "\"drag_start\"");
    }
}
