// src/bridge/effects.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, CardKind};

/// カードを使う時に効果へ渡す引数。型の決まった閉じた enum にしておく。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "arg", content = "value", rename_all = "snake_case")]
pub enum UseArg {
    None,
    /// エンティティが置かれたデスクのスロット
    DeskSlot(usize),
    /// 対象を取るカードの対象
    Target(CardId),
}

/// カードが使われた時の効果を実行する協力者。
pub trait CardEffects {
    fn use_card(&mut self, card: &Card, arg: UseArg);
}

impl<F> CardEffects for F
where
    F: FnMut(&Card, UseArg),
{
    fn use_card(&mut self, card: &Card, arg: UseArg) {
        self(card, arg)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsedCard {
    pub card: CardId,
    pub kind: CardKind,
    pub arg: UseArg,
}

/// 使われたカードを記録するだけの `CardEffects`。wasm 側で JS に渡すのに使う。
#[derive(Debug, Default)]
pub struct UsedCardLog {
    used: Vec<UsedCard>,
}

impl UsedCardLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn used(&self) -> &[UsedCard] {
        &self.used
    }

    pub fn drain(&mut self) -> Vec<UsedCard> {
        std::mem::take(&mut self.used)
    }
}

impl CardEffects for UsedCardLog {
    fn use_card(&mut self, card: &Card, arg: UseArg) {
        self.used.push(UsedCard { card: card.id, kind: card.kind, arg });
    }
}
