//! Mansion View Model
//!
//! Maps a server `MansionState` to the text and classes the page renders.

use crate::config::MAX_STRIKES;
use crate::models::{Direction, MansionState};

pub const DEFAULT_OVERLAY: &str = "overlay-soft-warm";
pub const EMPTY_LINE: &str = "...";
pub const FINAL_LINE: &str = "……ええ時間やったな";

pub const STATUS_PLAYING: &str = "もう一杯、ゆっくり飲んで確認。";
pub const STATUS_GAME_OVER: &str = "……あれ？ 松本が怒ってる気がする。";
pub const STATUS_CLEARED: &str = "全部見抜いた。乾杯しよう。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MansionPhase {
    Playing,
    GameOver,
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MansionView {
    pub cups_total: u32,
    /// `drinks / total`, drinks capped at total
    pub cup_counter: String,
    pub strike_counter: String,
    pub line: String,
    pub overlay_class: String,
    /// Glass that avoids a strike this turn
    pub correct_direction: Direction,
    pub phase: MansionPhase,
}

impl MansionView {
    /// `cups_total` is the last known total, used when the response carries none
    pub fn from_state(state: &MansionState, cups_total: u32) -> Self {
        let cups_total = if state.cups_total > 0 { state.cups_total } else { cups_total };
        let phase = if state.game_over {
            MansionPhase::GameOver
        } else if state.cleared {
            MansionPhase::Cleared
        } else {
            MansionPhase::Playing
        };

        Self {
            cups_total,
            cup_counter: counter(state.drink_count.min(cups_total), cups_total),
            strike_counter: counter(state.strike_count, MAX_STRIKES),
            line: non_empty(state.line.as_deref()).unwrap_or(EMPTY_LINE).to_string(),
            overlay_class: overlay_class(state.anomaly_type.as_deref()),
            correct_direction: if state.has_anomaly { Direction::Right } else { Direction::Left },
            phase,
        }
    }

    /// Terminal phases stop accepting choices
    pub fn interactive(&self) -> bool {
        self.phase == MansionPhase::Playing
    }

    pub fn shows_game_over(&self) -> bool {
        self.phase == MansionPhase::GameOver
    }

    pub fn status(&self) -> &'static str {
        match self.phase {
            MansionPhase::Playing => STATUS_PLAYING,
            MansionPhase::GameOver => STATUS_GAME_OVER,
            MansionPhase::Cleared => STATUS_CLEARED,
        }
    }
}

/// Values for the `?debug=1` panel
#[derive(Debug, Clone, PartialEq)]
pub struct DebugInfo {
    pub turn: String,
    pub anomaly: &'static str,
    pub anomaly_type: String,
}

impl DebugInfo {
    pub fn from_state(state: &MansionState) -> Self {
        Self {
            turn: state.drink_count.to_string(),
            anomaly: if state.has_anomaly { "ON" } else { "OFF" },
            anomaly_type: non_empty(state.anomaly_type.as_deref()).unwrap_or("-").to_string(),
        }
    }
}

pub fn counter(value: u32, total: u32) -> String {
    format!("{} / {}", value, total)
}

pub fn overlay_class(anomaly_type: Option<&str>) -> String {
    format!("mansion-overlay {}", non_empty(anomaly_type).unwrap_or(DEFAULT_OVERLAY))
}

/// Class list of a glass trigger
pub fn glass_class(direction: Direction, interactive: bool, highlighted: bool) -> String {
    let mut class = format!("glass-trigger glass-{}", direction.as_str());
    if !interactive {
        class.push_str(" disabled");
    }
    if highlighted {
        class.push_str(" anomaly");
    }
    class
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
