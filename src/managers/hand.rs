// src/managers/hand.rs
//! 手札とインタラクションの状態機械だよ！🃏
//!
//! カード単位のポインタイベント (`dispatch`) と、毎フレームの `tick` で動く。
//! 掴んでるカード (`active`) は手札全体でいつも 0 枚か 1 枚。

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::bridge::animation::CardAnimator;
use crate::bridge::effects::{CardEffects, UseArg};
use crate::bridge::projector::Projector;
use crate::components::card::{Card, CardId, CardKind, CardState};
use crate::components::placement::{Placement, Vec3};
use crate::config::table::TableConfig;
use crate::error::{HandError, LayoutError};
use crate::input::pointer::{PointerEvent, PointerEventKind, PointerSnapshot};
use crate::input::subscription::SubscriptionRegistry;
use crate::logic::layout::hand_fan_placement;
use crate::managers::desk::DeskSlotManager;

/// 掴んでたカードを離した結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReleaseOutcome {
    /// 手札エリアで離したので戻った
    ReturnedToHand,
    /// 対象なし呪文として使われた
    Used,
    /// エンティティとしてデスクの `index` に置かれた
    Placed { index: usize },
    /// 対象選択待ち。カードは `Pickup` のまま
    AwaitingTarget,
}

pub struct HandManager<A, P, E> {
    cards: Vec<Card>,
    active: Option<CardId>,
    registry: SubscriptionRegistry,
    desk: DeskSlotManager,
    config: TableConfig,
    animator: A,
    projector: P,
    effects: E,
}

impl<A, P, E> HandManager<A, P, E>
where
    A: CardAnimator,
    P: Projector,
    E: CardEffects,
{
    pub fn new(config: TableConfig, animator: A, projector: P, effects: E) -> Self {
        let desk = DeskSlotManager::new(config.desk_spacing);
        Self {
            cards: Vec::new(),
            active: None,
            registry: SubscriptionRegistry::new(),
            desk,
            config,
            animator,
            projector,
            effects,
        }
    }

    // --- 読み取り用 ---

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn active(&self) -> Option<CardId> {
        self.active
    }

    pub fn desk(&self) -> &DeskSlotManager {
        &self.desk
    }

    pub fn registry(&self) -> &SubscriptionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn projector_mut(&mut self) -> &mut P {
        &mut self.projector
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    /// 今の枚数で `index` 番目のカードが休む位置。
    pub fn rest_placement(&self, index: usize) -> Result<Placement, LayoutError> {
        hand_fan_placement(&self.config.hand, self.cards.len(), index)
    }

    // --- 手札の出し入れ ---

    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        self.add_cards([card])
    }

    /// まとめて手札の末尾に加える。新しいカードは最終的な枚数で計算した
    /// スロットへ直接飛んで、もともとあったカードはその後で並べ直す。
    ///
    /// 休んでる (`Hand`) カードしか受け付けない。1 枚でもダメなら何も加えない。
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) -> Result<(), HandError> {
        let incoming: Vec<Card> = cards.into_iter().collect();
        for (i, card) in incoming.iter().enumerate() {
            let seen_before = incoming[..i].iter().any(|c| c.id == card.id);
            if seen_before || self.index_of(card.id).is_some() {
                return Err(HandError::DuplicateCard(card.id));
            }
            if card.state() != CardState::Hand {
                warn!("refusing to deal card {} in state {:?}", card.id, card.state());
                return Err(HandError::NotDealable { card: card.id, state: card.state() });
            }
        }
        if incoming.is_empty() {
            return Ok(());
        }

        let first_new = self.cards.len();
        for card in incoming {
            self.registry.register(card.id);
            self.cards.push(card);
        }
        info!("dealt {} card(s), hand now holds {}", self.cards.len() - first_new, self.cards.len());

        let count = self.cards.len();
        for index in first_new..count {
            let target = hand_fan_placement(&self.config.hand, count, index)?;
            self.animator.move_to_hand(self.cards[index].id, target);
        }
        self.reflow(first_new)?;
        Ok(())
    }

    /// 外部要因 (捨て札とか) で手札から抜く。購読も外して並べ直す。
    pub fn remove_card(&mut self, id: CardId) -> Result<Card, HandError> {
        let index = self.index_of(id).ok_or(HandError::UnknownCard(id))?;
        let card = self.detach(index)?;
        info!("card {} removed from hand", id);
        Ok(card)
    }

    // --- ポインタイベント ---

    /// カード単位のイベントを 1 つ処理する。離した時だけ結果が返る。
    /// 購読してないカード宛てのイベントは警告を出して捨てるよ。
    pub fn dispatch(
        &mut self,
        event: PointerEvent,
        pointer: &PointerSnapshot,
    ) -> Result<Option<ReleaseOutcome>, HandError> {
        let PointerEvent { card, kind } = event;
        if !self.registry.is_subscribed(card) {
            warn!("ignoring {:?} for unsubscribed card {}", kind, card);
            return Ok(None);
        }
        let index = self.index_of(card).ok_or(HandError::UnknownCard(card))?;

        match kind {
            PointerEventKind::HoverIn => {
                if self.active.is_none() && self.cards[index].state() == CardState::Hand {
                    let rest = self.rest_placement(index)?;
                    self.cards[index].set_state(CardState::Active);
                    self.animator.show_card(card, rest.position * self.config.hover_scale);
                }
                Ok(None)
            }
            PointerEventKind::HoverOut => {
                // 手札に戻した直後は Hand のまま持ち上がって見えてるので、Hand でも戻す
                if self.active.is_none()
                    && matches!(self.cards[index].state(), CardState::Hand | CardState::Active)
                {
                    let rest = self.rest_placement(index)?;
                    self.cards[index].set_state(CardState::Hand);
                    self.animator.un_show_card(card, rest);
                }
                Ok(None)
            }
            PointerEventKind::DragStart => {
                self.pick_up(index)?;
                Ok(None)
            }
            PointerEventKind::Click => {
                if self.active == Some(card) {
                    self.release(index, pointer).map(Some)
                } else {
                    self.pick_up(index)?;
                    Ok(None)
                }
            }
            PointerEventKind::Release => {
                if self.active == Some(card) {
                    self.release(index, pointer).map(Some)
                } else {
                    debug!("release on card {} which is not held", card);
                    Ok(None)
                }
            }
        }
    }

    /// 毎フレーム呼ぶ。掴んでるカードをポインタに追従させて、
    /// エンティティならデスクの挿入プレビューも更新する。
    pub fn tick(&mut self, pointer: &PointerSnapshot) -> Result<(), HandError> {
        let Some(id) = self.active else {
            return Ok(());
        };
        let index = self.index_of(id).ok_or(HandError::UnknownCard(id))?;
        let kind = self.cards[index].kind;
        if kind == CardKind::DirectedSpell {
            // 対象選択の矢印が出る予定なので、カード自体は動かさない
            return Ok(());
        }

        let rest = self.rest_placement(index)?;
        let local = self.projector.project(pointer.position);
        let follow = Vec3::new(local.x, local.y, rest.position.z - self.config.pickup_lift);
        self.animator.snap(id, Placement::at(follow));

        if kind == CardKind::Entity {
            if pointer.in_hand_zone(self.config.mouse_y_rate) {
                if self.desk.pending_insert().is_some() {
                    self.desk.update_entity_pos(&mut self.animator)?;
                }
            } else {
                self.desk
                    .reserve_insert_space(pointer.position, &self.projector, &mut self.animator)?;
            }
        }
        Ok(())
    }

    /// カードを使う。効果を呼んで、破棄して、残りを並べ直す。
    /// 対象選択が終わった `DirectedEntity` / `DirectedSpell` もここで解決する。
    pub fn resolve(&mut self, id: CardId, arg: UseArg) -> Result<(), HandError> {
        let index = self.index_of(id).ok_or(HandError::UnknownCard(id))?;
        info!("using card {} ({:?}) with {:?}", id, self.cards[index].kind, arg);
        self.effects.use_card(&self.cards[index], arg);
        self.cards[index].set_state(CardState::Destroyed);
        self.detach(index)?;
        Ok(())
    }

    fn pick_up(&mut self, index: usize) -> Result<(), HandError> {
        let id = self.cards[index].id;
        if let Some(held) = self.active {
            debug!("card {} is already held, ignoring pickup of {}", held, id);
            return Ok(());
        }
        let rest = self.rest_placement(index)?;
        self.cards[index].set_state(CardState::Pickup);
        self.active = Some(id);
        self.animator.stop_all(id);
        let lifted = Vec3::new(rest.position.x, rest.position.y, rest.position.z - self.config.pickup_lift);
        self.animator.snap(id, Placement::at(lifted));
        debug!("picked up card {}", id);
        Ok(())
    }

    fn release(&mut self, index: usize, pointer: &PointerSnapshot) -> Result<ReleaseOutcome, HandError> {
        let id = self.cards[index].id;

        if pointer.in_hand_zone(self.config.mouse_y_rate) {
            if self.desk.pending_insert().is_some() {
                self.desk.update_entity_pos(&mut self.animator)?;
            }
            let rest = self.rest_placement(index)?;
            self.cards[index].set_state(CardState::Hand);
            self.active = None;
            self.animator.show_card(id, rest.position * self.config.hover_scale);
            debug!("card {} returned to hand", id);
            return Ok(ReleaseOutcome::ReturnedToHand);
        }

        match self.cards[index].kind {
            CardKind::DriftlessSpell => {
                self.resolve(id, UseArg::None)?;
                Ok(ReleaseOutcome::Used)
            }
            CardKind::Entity => {
                let slot = self
                    .desk
                    .reserve_insert_space(pointer.position, &self.projector, &mut self.animator)?;
                self.desk.commit_pending(self.cards[index].clone(), &mut self.animator)?;
                self.resolve(id, UseArg::DeskSlot(slot))?;
                Ok(ReleaseOutcome::Placed { index: slot })
            }
            CardKind::DirectedEntity | CardKind::DirectedSpell => {
                info!("card {} needs a target, keeping it held", id);
                Ok(ReleaseOutcome::AwaitingTarget)
            }
        }
    }

    /// `index` のカードを手札から外す共通処理。
    fn detach(&mut self, index: usize) -> Result<Card, HandError> {
        let card = self.cards.remove(index);
        self.registry.deregister(card.id);
        if self.active == Some(card.id) {
            self.active = None;
            if self.desk.pending_insert().is_some() {
                self.desk.update_entity_pos(&mut self.animator)?;
            }
        }
        self.reflow(self.cards.len())?;
        Ok(card)
    }

    /// `until` より前のカードを今の枚数で並べ直す。掴んでるカードは
    /// ポインタに追従してるので触らない。
    fn reflow(&mut self, until: usize) -> Result<(), LayoutError> {
        let count = self.cards.len();
        for (index, card) in self.cards.iter().enumerate().take(until) {
            let rest = hand_fan_placement(&self.config.hand, count, index)?;
            match card.state() {
                CardState::Hand => self.animator.tweak_position(card.id, rest),
                CardState::Active => self.animator.show_card(card.id, rest.position * self.config.hover_scale),
                CardState::Pickup | CardState::Destroyed => {}
            }
        }
        Ok(())
    }
}
