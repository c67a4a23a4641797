// src/managers/mod.rs

// 状態を持つのはここだけ！デスク (場) と手札の管理。
pub mod desk;
pub mod hand;

pub use desk::{DeskSlotManager, InsertPreview};
pub use hand::{HandManager, ReleaseOutcome};
