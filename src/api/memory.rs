//! Memory Game Endpoints

use serde::{Deserialize, Serialize};

use super::{post_json, ApiError};
use crate::config::{MEMORY_CHECK_URL, MEMORY_FINISH_URL, MEMORY_START_URL};
use crate::models::{Card, MatchResult, MemoryStartResponse};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct StartArgs<'a> {
    player_name: &'a str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CheckMatchArgs<'a> {
    pub card1_id: &'a str,
    pub card2_id: &'a str,
    pub card1_pair: u32,
    pub card2_pair: u32,
    pub card1_image: &'a str,
    pub card2_image: &'a str,
}

impl<'a> CheckMatchArgs<'a> {
    pub fn new(card1: &'a Card, card2: &'a Card) -> Self {
        Self {
            card1_id: &card1.id,
            card2_id: &card2.id,
            card1_pair: card1.pair_id,
            card2_pair: card2.pair_id,
            card1_image: &card1.image,
            card2_image: &card2.image,
        }
    }
}

/// Final stats posted when a game ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinishArgs<'a> {
    pub player_name: &'a str,
    pub score: u32,
    pub attempts: u32,
    pub mistakes: u32,
    pub pairs_matched: u32,
    pub special_bonus: u32,
}

/// Finish acknowledgment; the body is not inspected
#[derive(Deserialize)]
struct FinishAck {}

// ========================
// Commands
// ========================

pub async fn start_memory_game(player_name: &str) -> Result<MemoryStartResponse, ApiError> {
    post_json(MEMORY_START_URL, Some(&StartArgs { player_name })).await
}

pub async fn check_match(card1: &Card, card2: &Card) -> Result<MatchResult, ApiError> {
    post_json(MEMORY_CHECK_URL, Some(&CheckMatchArgs::new(card1, card2))).await
}

pub async fn finish_memory_game(args: &FinishArgs<'_>) -> Result<(), ApiError> {
    let _: FinishAck = post_json(MEMORY_FINISH_URL, Some(args)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_match_body_shape() {
        let a = Card { id: "card_0".into(), image: "a.jpg".into(), pair_id: 0 };
        let b = Card { id: "card_5".into(), image: "c.jpg".into(), pair_id: 2 };
        let json = serde_json::to_value(CheckMatchArgs::new(&a, &b)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "card1_id": "card_0",
                "card2_id": "card_5",
                "card1_pair": 0,
                "card2_pair": 2,
                "card1_image": "a.jpg",
                "card2_image": "c.jpg",
            })
        );
    }

    #[test]
    fn test_finish_body_shape() {
        let args = FinishArgs {
            player_name: "taro",
            score: 40,
            attempts: 6,
            mistakes: 2,
            pairs_matched: 1,
            special_bonus: 30,
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["pairs_matched"], 1);
        assert_eq!(json["special_bonus"], 30);
        assert_eq!(json["player_name"], "taro");
    }
}
