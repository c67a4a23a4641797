// src/components/card.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// カード 1 枚ごとの安定したインスタンス ID だよ！🃏
/// 手札からデスクに移っても同じ ID のまま。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// カードの種類。プレイした時に何が起きるかはこれで決まる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// 対象を取らない呪文。離したらすぐ使う。
    DriftlessSpell,
    /// デスクに置かれるエンティティ。
    Entity,
    /// 対象を取るエンティティ (ターゲット選択は未実装)。
    DirectedEntity,
    /// 対象を取る呪文 (ターゲット選択は未実装)。
    DirectedSpell,
}

impl FromStr for CardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driftless_spell" => Ok(CardKind::DriftlessSpell),
            "entity" => Ok(CardKind::Entity),
            "directed_entity" => Ok(CardKind::DirectedEntity),
            "directed_spell" => Ok(CardKind::DirectedSpell),
            other => Err(format!("unknown card kind `{}`", other)),
        }
    }
}

/// 手札のカードのインタラクション状態。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// 手札で休んでる状態
    #[default]
    Hand,
    /// ホバーで持ち上がって見えてる状態 (まだ掴んでない)
    Active,
    /// ドラッグ中。手札全体で同時に 1 枚だけ。
    Pickup,
    /// 使われて消えた。もうどこにも戻らない。
    Destroyed,
}

/// キーワード能力。デスクに出たエンティティが持ち越すよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Taunt,
    Charge,
    Rush,
    Shield,
    Stealth,
}

impl FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "taunt" => Ok(Keyword::Taunt),
            "charge" => Ok(Keyword::Charge),
            "rush" => Ok(Keyword::Rush),
            "shield" => Ok(Keyword::Shield),
            "stealth" => Ok(Keyword::Stealth),
            other => Err(format!("unknown keyword `{}`", other)),
        }
    }
}

/// 手札にあるカードそのもの。
///
/// 状態は `HandManager` だけが書き換えるので、外からは読むだけ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    // 外から届いたデータで状態を決めさせない。いつも Hand から始まる
    #[serde(skip_deserializing)]
    state: CardState,
}

impl Card {
    /// 配られたばかりのカード (状態は `Hand`)。
    pub fn new(id: CardId, kind: CardKind) -> Self {
        Self { id, kind, keywords: Vec::new(), state: CardState::Hand }
    }

    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = Keyword>) -> Self {
        self.keywords.extend(keywords);
        self
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CardState) {
        self.state = state;
    }
}
