// src/bridge/mod.rs
//! コアの外側にいる協力者たちとの境界。
//!
//! * `Projector`: スクリーン座標 → テーブルローカル座標
//! * `CardAnimator`: 計算した配置を見た目に反映する (撃ちっぱなし)
//! * `CardEffects`: カードが使われた時の効果

pub mod animation;
pub mod effects;
pub mod projector;

pub use animation::{CardAnimator, Directive, DirectiveQueue};
pub use effects::{CardEffects, UseArg, UsedCard, UsedCardLog};
pub use projector::{PerspectiveProjector, Projector};
