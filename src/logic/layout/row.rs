// src/logic/layout/row.rs

use crate::components::placement::Vec3;
use crate::error::LayoutError;
use crate::logic::layout::check_slot;

/// 0 を中心に左右対称な一列の、`index` 番目の x オフセット。
pub fn row_offset(spacing: f32, count: usize, index: usize) -> Result<f32, LayoutError> {
    check_slot(count, index)?;
    let half_span = spacing * (count - 1) as f32 / 2.0;
    Ok(spacing * index as f32 - half_span)
}

/// デスクの列での位置。回転も高さのずれもない、ただの一列。
pub fn desk_row_position(spacing: f32, count: usize, index: usize) -> Result<Vec3, LayoutError> {
    Ok(Vec3::new(row_offset(spacing, count, index)?, 0.0, 0.0))
}
