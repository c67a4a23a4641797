// src/app/mod.rs
//! JS から触る wasm の窓口と、ブラウザのイベントリスナー管理だよ！

pub mod browser_event_manager;
pub mod table_app;

pub use table_app::TableApp;
