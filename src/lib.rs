// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod app; // JS 向けの窓口 (TableApp) とブラウザのイベントリスナー
pub mod bridge; // 外側の協力者 (投影、アニメーション、カード効果) とのインターフェース
pub mod components; // カード、デスクのエンティティ、座標
pub mod config; // レイアウト定数と設定
pub mod error;
pub mod input; // ポインタ入力とイベント購読
pub mod logic; // レイアウト計算 (純粋関数)
pub mod managers; // 手札とデスクの状態管理
pub mod replay; // witness データの検証

pub use app::TableApp;
pub use bridge::{CardAnimator, CardEffects, Directive, DirectiveQueue, PerspectiveProjector, Projector, UseArg};
pub use components::{Card, CardId, CardKind, CardState, DeskEntity, Keyword, Placement, Vec3};
pub use config::TableConfig;
pub use error::TableError;
pub use input::{PointerEvent, PointerEventKind, PointerSnapshot, ScreenPoint, Viewport};
pub use managers::{DeskSlotManager, HandManager, ReleaseOutcome};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックを console に出すフックと、log クレートの出力先 (console) をセットする。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger was already initialised".into());
    }
    log::info!("card table wasm loaded");
}
