// src/components/desk_entity.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Keyword};
use crate::components::placement::Vec3;

/// デスクに置かれたエンティティ。元になったカードの ID で識別するよ。
///
/// 位置は「デスク内の index と今の枚数」だけから決まる。保存してるのは
/// 最後に計算した値で、リフローのたびに上書きされる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskEntity {
    pub card: CardId,
    pub keywords: Vec<Keyword>,
    pub position: Vec3,
}

impl DeskEntity {
    /// プレイされたカードからエンティティを作る。カードはここで消費される。
    pub fn from_card(card: Card, position: Vec3) -> Self {
        Self { card: card.id, keywords: card.keywords, position }
    }

    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.keywords.contains(&keyword)
    }
}
