// src/logic/mod.rs
//! 状態を持たない計算ロジック。

pub mod layout;
