// src/bridge/animation.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::placement::{Placement, Vec3};

/// 見た目 (トゥイーン) 担当への指示。全部撃ちっぱなしで、完了は待たない。
/// 最新の目標だけ伝えれば OK。
pub trait CardAnimator {
    /// 手札の自分のスロットへ移動 (配られた時)。
    fn move_to_hand(&mut self, card: CardId, target: Placement);
    /// ホバーで持ち上げて見せる。
    fn show_card(&mut self, card: CardId, position: Vec3);
    /// 持ち上げを戻して休む位置へ。
    fn un_show_card(&mut self, card: CardId, target: Placement);
    /// 再生中のアニメーションを全部止める。
    fn stop_all(&mut self, card: CardId);
    /// リフローで新しいスロットへ少しずらす。
    fn tweak_position(&mut self, card: CardId, target: Placement);
    /// トゥイーンなしで即座に置く (掴んだ瞬間とポインタ追従)。
    fn snap(&mut self, card: CardId, target: Placement);
    /// デスクにエンティティを出す。
    fn spawn_entity(&mut self, entity: CardId, position: Vec3);
    /// デスクのエンティティを置き直す。
    fn set_entity_position(&mut self, entity: CardId, position: Vec3);
}

/// `CardAnimator` の呼び出し 1 回分を値にしたもの。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum Directive {
    MoveToHand { card: CardId, target: Placement },
    ShowCard { card: CardId, position: Vec3 },
    UnShowCard { card: CardId, target: Placement },
    StopAll { card: CardId },
    TweakPosition { card: CardId, target: Placement },
    Snap { card: CardId, target: Placement },
    SpawnEntity { entity: CardId, position: Vec3 },
    SetEntityPosition { entity: CardId, position: Vec3 },
}

impl Directive {
    /// 指示の対象 (カード or エンティティ) の ID。
    pub fn subject(&self) -> CardId {
        match self {
            Directive::MoveToHand { card, .. }
            | Directive::ShowCard { card, .. }
            | Directive::UnShowCard { card, .. }
            | Directive::StopAll { card }
            | Directive::TweakPosition { card, .. }
            | Directive::Snap { card, .. } => *card,
            Directive::SpawnEntity { entity, .. } | Directive::SetEntityPosition { entity, .. } => *entity,
        }
    }
}

/// 指示をためておくキュー。wasm 側は毎フレーム `drain` して JS に渡す。
/// テストでは何が指示されたかの確認に使うよ。
#[derive(Debug, Default)]
pub struct DirectiveQueue {
    directives: Vec<Directive>,
}

impl DirectiveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn drain(&mut self) -> Vec<Directive> {
        std::mem::take(&mut self.directives)
    }

    pub fn clear(&mut self) {
        self.directives.clear();
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// 指定した ID 宛ての最後の指示。
    pub fn last_for(&self, subject: CardId) -> Option<&Directive> {
        self.directives.iter().rev().find(|d| d.subject() == subject)
    }
}

impl CardAnimator for DirectiveQueue {
    fn move_to_hand(&mut self, card: CardId, target: Placement) {
        self.directives.push(Directive::MoveToHand { card, target });
    }

    fn show_card(&mut self, card: CardId, position: Vec3) {
        self.directives.push(Directive::ShowCard { card, position });
    }

    fn un_show_card(&mut self, card: CardId, target: Placement) {
        self.directives.push(Directive::UnShowCard { card, target });
    }

    fn stop_all(&mut self, card: CardId) {
        self.directives.push(Directive::StopAll { card });
    }

    fn tweak_position(&mut self, card: CardId, target: Placement) {
        self.directives.push(Directive::TweakPosition { card, target });
    }

    fn snap(&mut self, card: CardId, target: Placement) {
        self.directives.push(Directive::Snap { card, target });
    }

    fn spawn_entity(&mut self, entity: CardId, position: Vec3) {
        self.directives.push(Directive::SpawnEntity { entity, position });
    }

    fn set_entity_position(&mut self, entity: CardId, position: Vec3) {
        self.directives.push(Directive::SetEntityPosition { entity, position });
    }
}
