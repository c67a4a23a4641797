// src/config/layout.rs
//! テーブルのレイアウトに関する定数を定義するよ！
//! 手札の扇、デスクの列、ホバーやドラッグ時のオフセットなど。

// --- 手札 (テーブルローカル座標) ---
pub const HAND_ORIGIN_X: f32 = 0.0;
pub const HAND_ORIGIN_Y: f32 = -1.4; // 手札はデスクより手前 (画面下) に並ぶ
pub const HAND_ORIGIN_Z: f32 = -0.1;
pub const HAND_SPACING: f32 = 0.5; // 少ない枚数の時のカード間隔
pub const HAND_MAX_WIDTH: f32 = 1.8; // 4 枚の時の扇の横幅
pub const CARD_HALF_HEIGHT: f32 = 0.36; // カードの中心 (回転軸) から下端まで
pub const HAND_DEPTH_STEP: f32 = 0.02; // 右のカードほど手前に重ねる

// --- 扇の形 ---
pub const FAN_FLAT_LIMIT: usize = 3; // この枚数までは回転なしの一列
pub const FAN_STEP_DEG: f32 = 10.0; // 1 枚ごとの傾き
pub const FAN_GROWTH_RATIO: f32 = 0.25; // 4 枚目以降、1 枚ごとに spacing * これだけ広がる
pub const FAN_DROP_FACTOR: f32 = 3.0; // 外側のカードを下げる強さ

// --- オーバーレイ (スクリーン座標、画面の高さに対する比率) ---
pub const OVERLAY_HAND_SPACING_RATE: f32 = 0.08;
pub const OVERLAY_CENTER_SPACING_RATE: f32 = 0.2;
pub const OVERLAY_HAND_BASE_Y_RATE: f32 = 0.01;
pub const OVERLAY_MAX_HAND_WIDTH_RATE: f32 = 0.5;
pub const OVERLAY_CARD_HALF_HEIGHT_RATE: f32 = 0.2;

// --- デスク ---
pub const DESK_SPACING: f32 = 1.0; // エンティティ 1 体分の幅

// --- インタラクション ---
pub const HOVER_SCALE: f32 = 0.75; // ホバー時、位置ベクトルをこれだけ縮めてカメラに寄せる
pub const PICKUP_LIFT: f32 = 0.05; // 掴んだカードを持ち上げる量 (z をマイナス方向へ)
pub const HAND_ZONE_RATE: f32 = 0.15; // ポインタの y が画面高さ * これ未満なら「手札エリア」

// --- カメラ ---
pub const CAMERA_DISTANCE: f32 = 10.0; // カメラからテーブル平面までの距離
pub const CAMERA_FOV_Y_DEG: f32 = 30.0;
