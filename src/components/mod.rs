// src/components/mod.rs

// テーブルに出てくるデータ部品たち！
pub mod card;
pub mod desk_entity;
pub mod placement;

pub use card::{Card, CardId, CardKind, CardState, Keyword};
pub use desk_entity::DeskEntity;
pub use placement::{Placement, Vec3};
