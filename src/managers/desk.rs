// src/managers/desk.rs
//! デスク (場) に並んだエンティティの管理。
//!
//! 挿入位置のプレビューはトランザクションっぽく扱うよ:
//! * `preview_insert`: 何も変えない。計算するだけ。
//! * `reserve_insert_space`: プレビューを見た目に反映して、挿入予定の index を覚える。
//! * `insert` / `commit_pending`: 確定。
//! * `update_entity_pos`: 取り消し。見た目を確定済みの位置に戻す。
//!
//! プレビュー中も `DeskEntity::position` は確定済みの値のまま。

use itertools::Itertools;
use log::{debug, info};

use crate::bridge::animation::CardAnimator;
use crate::bridge::projector::Projector;
use crate::components::card::{Card, CardId};
use crate::components::desk_entity::DeskEntity;
use crate::components::placement::Vec3;
use crate::config::layout::DESK_SPACING;
use crate::error::{DeskError, LayoutError};
use crate::input::pointer::ScreenPoint;
use crate::logic::layout::desk_row_position;

/// 「ここに挿入したらこう並ぶ」の計算結果。
#[derive(Debug, Clone, PartialEq)]
pub struct InsertPreview {
    pub index: usize,
    /// 既存エンティティのプレビュー位置 (今の並び順)。
    pub positions: Vec<(CardId, Vec3)>,
}

#[derive(Debug)]
pub struct DeskSlotManager {
    entities: Vec<DeskEntity>,
    spacing: f32,
    pending: Option<usize>,
}

impl Default for DeskSlotManager {
    fn default() -> Self {
        Self::new(DESK_SPACING)
    }
}

impl DeskSlotManager {
    pub fn new(spacing: f32) -> Self {
        Self { entities: Vec::new(), spacing, pending: None }
    }

    pub fn entities(&self) -> &[DeskEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn index_of(&self, card: CardId) -> Option<usize> {
        self.entities.iter().position(|e| e.card == card)
    }

    /// 最後の `reserve_insert_space` で見つかった挿入予定の index。
    pub fn pending_insert(&self) -> Option<usize> {
        self.pending
    }

    /// 左から見て、今の x が `local_x` を超える最初のエンティティの index。
    /// 誰も超えなければ末尾 (`len`)。
    pub fn insert_index_for(&self, local_x: f32) -> usize {
        self.entities
            .iter()
            .find_position(|e| e.position.x > local_x)
            .map(|(index, _)| index)
            .unwrap_or(self.entities.len())
    }

    /// 副作用なしのプレビュー。枚数を 1 増やしたつもりで全員の位置を計算する。
    pub fn preview_insert(&self, local_x: f32) -> Result<InsertPreview, LayoutError> {
        let index = self.insert_index_for(local_x);
        let count = self.entities.len() + 1;
        let positions = self
            .entities
            .iter()
            .enumerate()
            .map(|(i, entity)| {
                let slot = if i < index { i } else { i + 1 };
                desk_row_position(self.spacing, count, slot).map(|pos| (entity.card, pos))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(InsertPreview { index, positions })
    }

    /// ポインタの位置から挿入先を探して、プレビューの並びを見た目に反映する。
    pub fn reserve_insert_space(
        &mut self,
        pointer: ScreenPoint,
        projector: &dyn Projector,
        animator: &mut dyn CardAnimator,
    ) -> Result<usize, DeskError> {
        let local = projector.project(pointer);
        let preview = self.preview_insert(local.x)?;
        if self.pending != Some(preview.index) {
            debug!("desk insert preview moved to slot {} (local x = {:.2})", preview.index, local.x);
        }
        for (card, position) in &preview.positions {
            animator.set_entity_position(*card, *position);
        }
        self.pending = Some(preview.index);
        Ok(preview.index)
    }

    /// プレビューを取り消して、今の枚数で並べ直す。
    pub fn update_entity_pos(&mut self, animator: &mut dyn CardAnimator) -> Result<(), DeskError> {
        if self.pending.take().is_some() {
            debug!("desk insert preview cancelled");
        }
        self.reflow(animator)?;
        Ok(())
    }

    /// カードからエンティティを作って `index` に挿入する。全員並べ直し。
    pub fn insert(
        &mut self,
        card: Card,
        index: usize,
        animator: &mut dyn CardAnimator,
    ) -> Result<DeskEntity, DeskError> {
        let count = self.entities.len();
        if index > count {
            return Err(DeskError::InsertOutOfRange { index, count });
        }

        let position = desk_row_position(self.spacing, count + 1, index)?;
        let entity = DeskEntity::from_card(card, position);
        info!("placing entity {} on desk slot {} of {}", entity.card, index, count + 1);
        animator.spawn_entity(entity.card, position);
        self.entities.insert(index, entity.clone());
        self.pending = None;
        self.reflow(animator)?;
        Ok(entity)
    }

    /// `reserve_insert_space` で覚えた index に挿入する。
    pub fn commit_pending(
        &mut self,
        card: Card,
        animator: &mut dyn CardAnimator,
    ) -> Result<DeskEntity, DeskError> {
        let index = self.pending.ok_or(DeskError::NoPendingInsert)?;
        self.insert(card, index, animator)
    }

    fn reflow(&mut self, animator: &mut dyn CardAnimator) -> Result<(), LayoutError> {
        let count = self.entities.len();
        for (index, entity) in self.entities.iter_mut().enumerate() {
            entity.position = desk_row_position(self.spacing, count, index)?;
            animator.set_entity_position(entity.card, entity.position);
        }
        Ok(())
    }
}
