// src/input/subscription.rs

use log::debug;
use std::collections::HashSet;

use crate::components::card::CardId;

/// カードごとのイベント購読を管理するよ。
///
/// 手札に入った時に登録、破棄・除去される時に解除。登録すると
/// `PointerEventKind` の全種類をまとめて受け取る。解除されたカードに
/// 遅れて届いたイベントは `is_subscribed` が false になるので捨てられる。
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    cards: HashSet<CardId>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 購読する。2 回呼んでも 1 回分のまま。
    pub fn register(&mut self, card: CardId) {
        debug!("subscribing pointer hooks for card {}", card);
        self.cards.insert(card);
    }

    /// 購読を外す。登録されてなかったら false。
    pub fn deregister(&mut self, card: CardId) -> bool {
        debug!("dropping pointer hooks for card {}", card);
        self.cards.remove(&card)
    }

    pub fn is_subscribed(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
