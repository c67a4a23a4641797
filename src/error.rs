// src/error.rs
//! テーブル全体で使うエラー型をまとめておくよ！
//! レイアウト、デスク、手札、リプレイ、設定ごとに分けて、最後に `TableError` でひとまとめ。

use thiserror::Error;

use crate::components::card::{CardId, CardState};

/// レイアウト計算のエラー。index >= count は呼び出し側のバグなので、
/// 丸めたりせずにそのまま弾くよ。🙅‍♀️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("slot index {index} is out of range for {count} item(s)")]
    IndexOutOfRange { index: usize, count: usize },
}

/// デスク (場) 操作のエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeskError {
    #[error("cannot insert at {index}: desk holds {count} entit(ies)")]
    InsertOutOfRange { index: usize, count: usize },
    #[error("no insertion preview is pending")]
    NoPendingInsert,
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// 手札操作のエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("card {0} is already in the hand")]
    DuplicateCard(CardId),
    #[error("card {0} is not in the hand")]
    UnknownCard(CardId),
    #[error("card {card} cannot be dealt while {state:?}")]
    NotDealable { card: CardId, state: CardState },
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Desk(#[from] DeskError),
}

/// リプレイ (witness) から届いたデータが壊れてた時のエラー。
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("witness `{witness}` is missing required field `{field}`")]
    MissingField {
        witness: &'static str,
        field: &'static str,
    },
    #[error("`{left}` has {left_len} id(s) but `{right}` has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },
    #[error("no card kind known for definition {0:?}")]
    UnknownDefinition(Option<u32>),
    #[error("malformed witness payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// 設定 JSON の読み込みエラー。読めても値がおかしければ弾くよ。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid table config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid table config: `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// 外側 (wasm ブリッジとか) に返すための全部入りエラー。
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<LayoutError> for TableError {
    fn from(err: LayoutError) -> Self {
        TableError::Hand(HandError::Layout(err))
    }
}

impl From<DeskError> for TableError {
    fn from(err: DeskError) -> Self {
        TableError::Hand(HandError::Desk(err))
    }
}
