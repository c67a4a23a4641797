// src/app/table_app.rs

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, Mutex};

use log::{error, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::browser_event_manager::{self, ListenerSlot};
use crate::bridge::animation::DirectiveQueue;
use crate::bridge::effects::UsedCardLog;
use crate::bridge::projector::PerspectiveProjector;
use crate::components::card::{Card, CardId, CardKind};
use crate::config::table::TableConfig;
use crate::error::TableError;
use crate::input::pointer::{PointerEvent, PointerEventKind, PointerSnapshot, Viewport};
use crate::managers::hand::HandManager;
use crate::replay::init_replace::InitReplace;

type TableHand = HandManager<DirectiveQueue, PerspectiveProjector, UsedCardLog>;

fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// serde で JSON にしてから JS の値にする。
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(js_error)?;
    js_sys::JSON::parse(&json)
}

// --- テーブル全体を JS から操作するための窓口 ---
#[wasm_bindgen]
pub struct TableApp {
    hand: TableHand,
    // mousemove リスナーが書き込むので共有
    pointer: Arc<Mutex<PointerSnapshot>>,
    mousemove_closure: ListenerSlot,
}

#[wasm_bindgen]
impl TableApp {
    /// `config_json` は省略可。足りない項目はデフォルト値になる。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<TableApp, JsValue> {
        let config = match config_json {
            Some(json) => TableConfig::from_json(&json).map_err(js_error)?,
            None => TableConfig::default(),
        };
        let viewport = browser_event_manager::window_viewport().unwrap_or_default();
        let projector = PerspectiveProjector::new(config.camera.clone(), viewport);
        info!("TableApp: initialised with a {}x{} viewport", viewport.width, viewport.height);

        Ok(Self {
            hand: HandManager::new(config, DirectiveQueue::new(), projector, UsedCardLog::new()),
            pointer: Arc::new(Mutex::new(PointerSnapshot::new(Default::default(), viewport))),
            mousemove_closure: Arc::new(Mutex::new(None)),
        })
    }

    /// `kind` は "driftless_spell" / "entity" / "directed_entity" / "directed_spell"。
    pub fn add_card(&mut self, id: u32, kind: &str) -> Result<(), JsValue> {
        let kind: CardKind = kind.parse().map_err(js_error)?;
        self.hand.add_card(Card::new(CardId(id), kind)).map_err(js_error)
    }

    pub fn remove_card(&mut self, id: u32) -> Result<(), JsValue> {
        self.hand.remove_card(CardId(id)).map(|_| ()).map_err(js_error)
    }

    pub fn hover_in(&mut self, id: u32) -> Result<JsValue, JsValue> {
        self.pointer_event(id, PointerEventKind::HoverIn)
    }

    pub fn hover_out(&mut self, id: u32) -> Result<JsValue, JsValue> {
        self.pointer_event(id, PointerEventKind::HoverOut)
    }

    pub fn click(&mut self, id: u32) -> Result<JsValue, JsValue> {
        self.pointer_event(id, PointerEventKind::Click)
    }

    pub fn drag_start(&mut self, id: u32) -> Result<JsValue, JsValue> {
        self.pointer_event(id, PointerEventKind::DragStart)
    }

    /// 離した結果 (`ReleaseOutcome`) を返す。掴んでなかったら null。
    pub fn release(&mut self, id: u32) -> Result<JsValue, JsValue> {
        self.pointer_event(id, PointerEventKind::Release)
    }

    /// 毎フレーム JS の requestAnimationFrame から呼ぶ。
    pub fn tick(&mut self) -> Result<(), JsValue> {
        let snapshot = self.snapshot()?;
        self.hand.projector_mut().set_viewport(snapshot.viewport);
        self.hand.tick(&snapshot).map_err(js_error)
    }

    /// リスナーを使わない時用。client 座標 (左上原点) で渡してね。
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32) -> Result<(), JsValue> {
        let mut snapshot = self.pointer.lock().map_err(js_error)?;
        snapshot.position = browser_event_manager::client_to_screen(client_x, client_y, snapshot.viewport);
        Ok(())
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        let viewport = Viewport::new(width, height);
        self.pointer.lock().map_err(js_error)?.viewport = viewport;
        self.hand.projector_mut().set_viewport(viewport);
        Ok(())
    }

    pub fn attach_pointer_listener(&self) -> Result<(), JsValue> {
        browser_event_manager::attach_pointer_listener(Arc::clone(&self.pointer), &self.mousemove_closure)
    }

    pub fn detach_pointer_listener(&self) -> Result<(), JsValue> {
        browser_event_manager::detach_pointer_listener(&self.mousemove_closure)
    }

    /// 初期手札の引き直し witness を適用する。
    /// `kinds_json` は定義 ID → カードの種類 (例: `{"100": "entity"}`)。
    pub fn apply_init_replace(&mut self, witness_json: &str, kinds_json: &str) -> Result<u32, JsValue> {
        self.init_replace(witness_json, kinds_json).map_err(|e| {
            error!("initReplace witness rejected: {}", e);
            js_error(e)
        })
    }

    /// たまったアニメーション指示を全部取り出す。
    pub fn take_directives(&mut self) -> Result<JsValue, JsValue> {
        let directives = self.hand.animator_mut().drain();
        to_js(&directives)
    }

    /// 使われたカードを全部取り出す。効果の解決は JS 側の仕事。
    pub fn take_used_cards(&mut self) -> Result<JsValue, JsValue> {
        let used = self.hand.effects_mut().drain();
        to_js(&used)
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn desk_size(&self) -> usize {
        self.hand.desk().len()
    }

    pub fn active_card(&self) -> Option<u32> {
        self.hand.active().map(|id| id.0)
    }
}

impl TableApp {
    fn snapshot(&self) -> Result<PointerSnapshot, JsValue> {
        self.pointer.lock().map(|guard| *guard).map_err(js_error)
    }

    fn pointer_event(&mut self, id: u32, kind: PointerEventKind) -> Result<JsValue, JsValue> {
        let snapshot = self.snapshot()?;
        let outcome = self
            .hand
            .dispatch(PointerEvent::new(CardId(id), kind), &snapshot)
            .map_err(js_error)?;
        match outcome {
            Some(outcome) => to_js(&outcome),
            None => Ok(JsValue::NULL),
        }
    }

    fn init_replace(&mut self, witness_json: &str, kinds_json: &str) -> Result<u32, TableError> {
        let replace = InitReplace::from_witness_json(witness_json)?;
        let kinds: HashMap<u32, CardKind> =
            serde_json::from_str(kinds_json).map_err(crate::error::ReplayError::from)?;
        let player = replace.player;
        let cards = replace.into_cards(|did| did.and_then(|did| kinds.get(&did).copied()))?;
        self.hand.add_cards(cards)?;
        Ok(player)
    }
}

impl Drop for TableApp {
    fn drop(&mut self) {
        if let Err(e) = browser_event_manager::detach_pointer_listener(&self.mousemove_closure) {
            error!("Failed to detach mousemove listener on drop: {:?}", e);
        }
    }
}
