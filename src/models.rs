//! Frontend Models
//!
//! Data structures matching the game server's JSON payloads.

use serde::{Deserialize, Serialize};

/// Memory game card (server-assigned identity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub image: String,
    pub pair_id: u32,
}

/// Response of `POST /api/game/memory-game/start`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemoryStartResponse {
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Response of `POST /api/game/memory-game/check-match`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "match", default)]
    pub is_match: bool,
}

/// One row of today's ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub name: String,
    pub score: i64,
}

/// Mansion game state as mirrored from the server
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MansionState {
    pub cups_total: u32,
    pub drink_count: u32,
    pub strike_count: u32,
    pub line: Option<String>,
    pub anomaly_type: Option<String>,
    pub has_anomaly: bool,
    pub cleared: bool,
    pub game_over: bool,
}

/// Which glass the player picks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
