// src/logic/layout/mod.rs
//! スロット配置の計算 (レイアウトエンジン) だよ！
//!
//! どの関数も `(count, index)` から配置を毎回ゼロから計算する。
//! 差分で少しずつずらすより、毎回全部計算し直す方が左右対称が崩れないからね。
//! index >= count は即エラー。

pub mod hand_fan;
pub mod overlay;
pub mod row;

#[cfg(test)]
mod tests;

pub use hand_fan::hand_fan_placement;
pub use overlay::OverlayLayout;
pub use row::{desk_row_position, row_offset};

use crate::error::LayoutError;

/// `index` が `count` 個のスロットに収まってるかチェック。
pub(crate) fn check_slot(count: usize, index: usize) -> Result<(), LayoutError> {
    if index >= count {
        return Err(LayoutError::IndexOutOfRange { index, count });
    }
    Ok(())
}
