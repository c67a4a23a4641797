// src/replay/init_replace.rs

use log::{debug, warn};
use serde::Deserialize;

use crate::components::card::{Card, CardId, CardKind};
use crate::error::ReplayError;

/// 初期手札の引き直し witness の名前。
pub const WITNESS_NAME: &str = "initReplace";

/// witness の生データ。どのフィールドも欠けうるので全部 Option で受けるよ。
#[derive(Debug, Deserialize)]
struct InitReplaceWitness {
    #[serde(rename = "playerIndex")]
    player_index: Option<u32>,
    #[serde(rename = "cardsRID")]
    cards_rid: Option<Vec<u32>>,
    #[serde(rename = "cardsDID")]
    cards_did: Option<Vec<u32>>,
}

/// ランタイム ID (必須) と定義 ID (あれば) の組。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef {
    pub runtime_id: CardId,
    pub definition_id: Option<u32>,
}

/// 検証済みの初期手札引き直し。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReplace {
    pub player: u32,
    pub cards: Vec<CardRef>,
}

impl InitReplace {
    /// witness の JSON を読んで検証する。
    ///
    /// `cardsRID` は必須。`cardsDID` は省略できるけど、あるなら同じ長さじゃないとダメ。
    pub fn from_witness_json(json: &str) -> Result<Self, ReplayError> {
        let raw: InitReplaceWitness = serde_json::from_str(json)?;

        let player = raw.player_index.ok_or(ReplayError::MissingField {
            witness: WITNESS_NAME,
            field: "playerIndex",
        })?;
        let runtime_ids = raw.cards_rid.ok_or(ReplayError::MissingField {
            witness: WITNESS_NAME,
            field: "cardsRID",
        })?;

        let cards = match raw.cards_did {
            Some(definition_ids) => {
                if definition_ids.len() != runtime_ids.len() {
                    warn!(
                        "{} witness has {} runtime id(s) but {} definition id(s)",
                        WITNESS_NAME,
                        runtime_ids.len(),
                        definition_ids.len()
                    );
                    return Err(ReplayError::LengthMismatch {
                        left: "cardsRID",
                        left_len: runtime_ids.len(),
                        right: "cardsDID",
                        right_len: definition_ids.len(),
                    });
                }
                runtime_ids
                    .into_iter()
                    .zip(definition_ids)
                    .map(|(rid, did)| CardRef { runtime_id: CardId(rid), definition_id: Some(did) })
                    .collect()
            }
            None => runtime_ids
                .into_iter()
                .map(|rid| CardRef { runtime_id: CardId(rid), definition_id: None })
                .collect(),
        };

        debug!("{} witness for player {} accepted", WITNESS_NAME, player);
        Ok(Self { player, cards })
    }

    /// 手札に入れるカードにする。種類は定義 ID から `kind_of` で引く。
    pub fn into_cards<F>(self, kind_of: F) -> Result<Vec<Card>, ReplayError>
    where
        F: Fn(Option<u32>) -> Option<CardKind>,
    {
        self.cards
            .into_iter()
            .map(|card| {
                let kind = kind_of(card.definition_id)
                    .ok_or(ReplayError::UnknownDefinition(card.definition_id))?;
                Ok(Card::new(card.runtime_id, kind))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn witness_with_both_id_lists() {
        let replace = InitReplace::from_witness_json(
            r#"{ "playerIndex": 1, "cardsRID": [10, 11], "cardsDID": [500, 501] }"#,
        )
        .unwrap();
        assert_eq!(replace.player, 1);
        assert_eq!(
            replace.cards,
            vec![
                CardRef { runtime_id: CardId(10), definition_id: Some(500) },
                CardRef { runtime_id: CardId(11), definition_id: Some(501) },
            ]
        );
        println!("initReplace 読み込みテスト、成功！🎉");
    }

    #[test]
    fn definition_ids_are_optional() {
        let replace =
            InitReplace::from_witness_json(r#"{ "playerIndex": 0, "cardsRID": [3] }"#).unwrap();
        assert_eq!(replace.cards[0].definition_id, None);
    }

    #[test]
    fn missing_required_fields_are_named() {
        let err = InitReplace::from_witness_json(r#"{ "playerIndex": 0 }"#).unwrap_err();
        assert!(matches!(err, ReplayError::MissingField { field: "cardsRID", .. }));
        assert_eq!(err.to_string(), "witness `initReplace` is missing required field `cardsRID`");

        let err = InitReplace::from_witness_json(r#"{ "cardsRID": [] }"#).unwrap_err();
        assert!(matches!(err, ReplayError::MissingField { field: "playerIndex", .. }));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = InitReplace::from_witness_json(
            r#"{ "playerIndex": 0, "cardsRID": [1, 2, 3], "cardsDID": [7] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::LengthMismatch { left_len: 3, right_len: 1, .. }));
    }

    #[test]
    fn malformed_json_is_a_replay_error() {
        let err = InitReplace::from_witness_json(r#"{ "cardsRID": "nope" }"#).unwrap_err();
        assert!(matches!(err, ReplayError::Json(_)));
    }

    #[test]
    fn into_cards_looks_up_kinds() {
        let replace = InitReplace::from_witness_json(
            r#"{ "playerIndex": 0, "cardsRID": [1, 2], "cardsDID": [100, 200] }"#,
        )
        .unwrap();
        let kind_of = |did: Option<u32>| match did {
            Some(100) => Some(CardKind::Entity),
            Some(200) => Some(CardKind::DriftlessSpell),
            _ => None,
        };
        let cards = replace.clone().into_cards(kind_of).unwrap();
        assert_eq!(cards[0], Card::new(CardId(1), CardKind::Entity));
        assert_eq!(cards[1].kind, CardKind::DriftlessSpell);

        let unknown = InitReplace { player: 0, cards: vec![CardRef { runtime_id: CardId(5), definition_id: None }] };
        assert!(matches!(unknown.into_cards(kind_of), Err(ReplayError::UnknownDefinition(None))));
    }
}
