// tests/interaction.rs
// 手札 → デスクまでの一連の流れを、公開 API だけで通しでテストするよ！

use card_table_wasm::bridge::{UsedCardLog, UsedCard};
use card_table_wasm::replay::InitReplace;
use card_table_wasm::{
    Card, CardId, CardKind, CardState, Directive, DirectiveQueue, HandManager, PerspectiveProjector, PointerEvent,
    PointerEventKind, PointerSnapshot, ReleaseOutcome, ScreenPoint, TableConfig, UseArg, Viewport,
};

const VIEWPORT: Viewport = Viewport::new(1000.0, 800.0);

fn table() -> HandManager<DirectiveQueue, PerspectiveProjector, UsedCardLog> {
    let config = TableConfig::default();
    let projector = PerspectiveProjector::new(config.camera.clone(), VIEWPORT);
    HandManager::new(config, DirectiveQueue::new(), projector, UsedCardLog::new())
}

fn pointer(x: f32, y: f32) -> PointerSnapshot {
    PointerSnapshot::new(ScreenPoint::new(x, y), VIEWPORT)
}

fn send(
    hand: &mut HandManager<DirectiveQueue, PerspectiveProjector, UsedCardLog>,
    id: u32,
    kind: PointerEventKind,
    at: PointerSnapshot,
) -> Option<ReleaseOutcome> {
    hand.dispatch(PointerEvent::new(CardId(id), kind), &at).unwrap()
}

#[test]
fn entities_fill_the_desk_left_to_right_by_drop_position() {
    let mut hand = table();
    hand.add_cards((1..=4).map(|id| Card::new(CardId(id), CardKind::Entity))).unwrap();

    // 画面中央 (テーブル原点) に 1 体目
    send(&mut hand, 1, PointerEventKind::DragStart, pointer(500.0, 60.0));
    hand.tick(&pointer(500.0, 400.0)).unwrap();
    let outcome = send(&mut hand, 1, PointerEventKind::Release, pointer(500.0, 400.0));
    assert_eq!(outcome, Some(ReleaseOutcome::Placed { index: 0 }));

    // 右端で離すと末尾、左端で離すと先頭
    send(&mut hand, 2, PointerEventKind::DragStart, pointer(500.0, 60.0));
    let outcome = send(&mut hand, 2, PointerEventKind::Release, pointer(950.0, 400.0));
    assert_eq!(outcome, Some(ReleaseOutcome::Placed { index: 1 }));

    send(&mut hand, 3, PointerEventKind::DragStart, pointer(500.0, 60.0));
    let outcome = send(&mut hand, 3, PointerEventKind::Release, pointer(50.0, 400.0));
    assert_eq!(outcome, Some(ReleaseOutcome::Placed { index: 0 }));

    let order: Vec<u32> = hand.desk().entities().iter().map(|e| e.card.0).collect();
    assert_eq!(order, vec![3, 1, 2]);
    let xs: Vec<f32> = hand.desk().entities().iter().map(|e| e.position.x).collect();
    assert_eq!(xs, vec![-1.0, 0.0, 1.0]);

    // 残りは 1 枚、手札の真ん中に戻ってる
    assert_eq!(hand.len(), 1);
    assert_eq!(hand.cards()[0].id, CardId(4));
    assert_eq!(hand.effects().used().len(), 3);
    println!("デスク配置の通しテスト、成功！🎉");
}

#[test]
fn dragging_back_into_the_hand_cancels_the_desk_preview() {
    let mut hand = table();
    hand.add_card(Card::new(CardId(1), CardKind::Entity)).unwrap();
    send(&mut hand, 1, PointerEventKind::DragStart, pointer(500.0, 60.0));

    hand.tick(&pointer(500.0, 500.0)).unwrap();
    assert!(hand.desk().pending_insert().is_some());
    hand.tick(&pointer(500.0, 100.0)).unwrap();
    assert_eq!(hand.desk().pending_insert(), None);

    let outcome = send(&mut hand, 1, PointerEventKind::Release, pointer(500.0, 100.0));
    assert_eq!(outcome, Some(ReleaseOutcome::ReturnedToHand));
    assert_eq!(hand.cards()[0].state(), CardState::Hand);
    assert!(hand.desk().is_empty());
    assert!(hand.effects().used().is_empty());
}

#[test]
fn init_replace_witness_deals_into_the_hand() {
    let replace = InitReplace::from_witness_json(
        r#"{ "playerIndex": 0, "cardsRID": [21, 22, 23], "cardsDID": [1, 2, 1] }"#,
    )
    .unwrap();
    let cards = replace
        .into_cards(|did| match did {
            Some(1) => Some(CardKind::Entity),
            Some(2) => Some(CardKind::DriftlessSpell),
            _ => None,
        })
        .unwrap();

    let mut hand = table();
    hand.add_cards(cards).unwrap();
    assert_eq!(hand.len(), 3);
    let moves = hand
        .animator()
        .directives()
        .iter()
        .filter(|d| matches!(d, Directive::MoveToHand { .. }))
        .count();
    assert_eq!(moves, 3);

    send(&mut hand, 22, PointerEventKind::Click, pointer(500.0, 60.0));
    let outcome = send(&mut hand, 22, PointerEventKind::Click, pointer(500.0, 600.0));
    assert_eq!(outcome, Some(ReleaseOutcome::Used));
    assert_eq!(
        hand.effects().used(),
        &[UsedCard { card: CardId(22), kind: CardKind::DriftlessSpell, arg: UseArg::None }]
    );
}

#[test]
fn config_json_changes_the_hand_zone() {
    let config = TableConfig::from_json(r#"{ "mouse_y_rate": 0.5 }"#).unwrap();
    let projector = PerspectiveProjector::new(config.camera.clone(), VIEWPORT);
    let mut hand = HandManager::new(config, DirectiveQueue::new(), projector, UsedCardLog::new());
    hand.add_card(Card::new(CardId(1), CardKind::DriftlessSpell)).unwrap();

    send(&mut hand, 1, PointerEventKind::DragStart, pointer(500.0, 60.0));
    // 既定 (0.15) なら手札エリアの外だけど、0.5 なら中
    let outcome = send(&mut hand, 1, PointerEventKind::Release, pointer(500.0, 300.0));
    assert_eq!(outcome, Some(ReleaseOutcome::ReturnedToHand));
}
