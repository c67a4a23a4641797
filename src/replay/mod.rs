// src/replay/mod.rs
//! イベントリプレイ (witness) から届くデータの検証。
//! 壊れたデータはここで弾いて、手札には正しいカードだけを渡すよ。

pub mod init_replace;

pub use init_replace::{CardRef, InitReplace};
