// src/input/mod.rs
//! ポインタ入力のモデル。1 本のポインタと、カード単位の離散イベントだけ扱うよ。

pub mod pointer;
pub mod subscription;

pub use pointer::{PointerEvent, PointerEventKind, PointerSnapshot, ScreenPoint, Viewport};
pub use subscription::SubscriptionRegistry;
