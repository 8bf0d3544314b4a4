//! Mansion Game Controller
//!
//! Signals mirroring the last server response, plus the start/choose round-trips.

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view::{counter, overlay_class, DebugInfo, MansionPhase, MansionView, FINAL_LINE};
use crate::api::{self, log_failure};
use crate::config::{DEFAULT_CUPS_TOTAL, FINAL_LINE_DELAY_MS, FLASH_MS, MAX_STRIKES, TIME_GLITCH_MS};
use crate::models::{Direction, MansionState};

const TAG: &str = "MANSION";

pub const STARTING: &str = "松本とのはなしを始めよう…";
pub const START_FAILED: &str = "通信に失敗しました。リロードして再試行してください。";
pub const CHOOSING: &str = "選択を確認中…";
pub const CHOOSE_FAILED: &str = "通信に失敗しました。もう一度選んでください。";

/// Mansion page state, provided via context
#[derive(Clone, Copy)]
pub struct MansionController {
    /// `?debug=1` reveals the debug panel and the correct glass
    pub debug: bool,
    pub status: RwSignal<String>,
    pub line: RwSignal<String>,
    /// The closing line is showing
    pub final_line: RwSignal<bool>,
    pub overlay_class: RwSignal<String>,
    pub time_glitch: RwSignal<bool>,
    pub cup_counter: RwSignal<String>,
    pub strike_counter: RwSignal<String>,
    /// Glass triggers accept clicks
    pub interactive: RwSignal<bool>,
    pub start_overlay: RwSignal<bool>,
    pub game_over_overlay: RwSignal<bool>,
    pub flash: RwSignal<bool>,
    pub correct_direction: RwSignal<Option<Direction>>,
    pub debug_info: RwSignal<Option<DebugInfo>>,
    cups_total: RwSignal<u32>,
    /// Bumped on every response; a scheduled final line only lands if unchanged
    final_line_generation: StoredValue<u32>,
}

impl MansionController {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            status: RwSignal::new(String::new()),
            line: RwSignal::new(String::new()),
            final_line: RwSignal::new(false),
            overlay_class: RwSignal::new(overlay_class(None)),
            time_glitch: RwSignal::new(false),
            cup_counter: RwSignal::new(counter(0, DEFAULT_CUPS_TOTAL)),
            strike_counter: RwSignal::new(counter(0, MAX_STRIKES)),
            interactive: RwSignal::new(false),
            start_overlay: RwSignal::new(true),
            game_over_overlay: RwSignal::new(false),
            flash: RwSignal::new(false),
            correct_direction: RwSignal::new(None),
            debug_info: RwSignal::new(None),
            cups_total: RwSignal::new(DEFAULT_CUPS_TOTAL),
            final_line_generation: StoredValue::new(0),
        }
    }

    pub fn start(self) {
        self.status.set(STARTING.to_string());
        self.game_over_overlay.set(false);
        self.flash.set(false);

        spawn_local(async move {
            match api::start_mansion().await {
                Ok(state) => {
                    let interactive = self.apply(&state);
                    self.start_overlay.set(false);
                    self.interactive.set(interactive);
                }
                Err(err) => {
                    log_failure(TAG, "start failed", &err);
                    self.status.set(START_FAILED.to_string());
                }
            }
        });
    }

    /// Pick a glass; ignored while a choice is pending or the game has ended
    pub fn choose(self, direction: Direction) {
        if !self.interactive.get_untracked() {
            return;
        }
        self.interactive.set(false);
        self.status.set(CHOOSING.to_string());

        spawn_local(async move {
            match api::choose_glass(direction).await {
                Ok(state) => {
                    let interactive = self.apply(&state);
                    self.interactive.set(interactive);
                    self.play_time_glitch();
                }
                Err(err) => {
                    log_failure(TAG, "choose failed", &err);
                    self.status.set(CHOOSE_FAILED.to_string());
                    self.interactive.set(true);
                }
            }
        });
    }

    /// Render a server response; returns whether choices stay enabled
    fn apply(self, state: &MansionState) -> bool {
        let view = MansionView::from_state(state, self.cups_total.get_untracked());

        self.cups_total.set(view.cups_total);
        self.cup_counter.set(view.cup_counter.clone());
        self.strike_counter.set(view.strike_counter.clone());
        self.line.set(view.line.clone());
        self.final_line.set(false);
        self.overlay_class.set(view.overlay_class.clone());
        if self.debug {
            self.correct_direction.set(Some(view.correct_direction));
            self.debug_info.set(Some(DebugInfo::from_state(state)));
        }

        self.final_line_generation.update_value(|generation| *generation += 1);

        match view.phase {
            MansionPhase::GameOver => {
                log!("[{}] game over after {} cups", TAG, state.drink_count);
                self.game_over_overlay.set(true);
                self.flash_game_over();
            }
            MansionPhase::Cleared => {
                log!("[{}] cleared", TAG);
                self.schedule_final_line();
            }
            MansionPhase::Playing => {}
        }

        self.status.set(view.status().to_string());
        view.interactive()
    }

    fn flash_game_over(self) {
        self.flash.set(true);
        spawn_local(async move {
            TimeoutFuture::new(FLASH_MS).await;
            self.flash.set(false);
        });
    }

    fn play_time_glitch(self) {
        self.time_glitch.set(true);
        spawn_local(async move {
            TimeoutFuture::new(TIME_GLITCH_MS).await;
            self.time_glitch.set(false);
        });
    }

    fn schedule_final_line(self) {
        let generation = self.final_line_generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(FINAL_LINE_DELAY_MS).await;
            if self.final_line_generation.get_value() == generation {
                self.line.set(FINAL_LINE.to_string());
                self.final_line.set(true);
            }
        });
    }
}
