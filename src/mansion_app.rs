//! Mansion Game Page
//!
//! Dialogue line, overlays, counters and the two glass triggers.

use leptos::prelude::*;

use crate::components::{DebugPanel, GlassTrigger};
use crate::context::use_config;
use crate::dom;
use crate::mansion::MansionController;
use crate::models::Direction;

#[component]
pub fn MansionApp() -> impl IntoView {
    let config = use_config();
    let mansion = MansionController::new(config.debug);
    provide_context(mansion);

    let home_url = StoredValue::new(config.home_url);

    let overlay_class = move || {
        let base = mansion.overlay_class.get();
        if mansion.time_glitch.get() {
            format!("{} overlay-time-glitch", base)
        } else {
            base
        }
    };

    view! {
        <div class="mansion-app">
            <div id="anomaly-overlay" class=overlay_class></div>

            <header class="mansion-counters">
                <span class="counter">"🍶 " <span id="cup-counter">{move || mansion.cup_counter.get()}</span></span>
                <span class="counter">"⚡ " <span id="strike-counter">{move || mansion.strike_counter.get()}</span></span>
            </header>

            <p
                id="line-text"
                class=move || if mansion.final_line.get() { "line-text final-line" } else { "line-text" }
            >
                {move || mansion.line.get()}
            </p>

            <div class="glass-row">
                <GlassTrigger direction=Direction::Left label="左のグラス" />
                <GlassTrigger direction=Direction::Right label="右のグラス" />
            </div>

            <p id="status-message" class="status-message">{move || mansion.status.get()}</p>

            <DebugPanel />

            <div
                id="start-overlay"
                class=move || if mansion.start_overlay.get() { "start-overlay" } else { "start-overlay hidden" }
            >
                <button id="start-game-btn" on:click=move |_| mansion.start()>
                    "はじめる"
                </button>
            </div>

            <div
                id="game-over-overlay"
                class=move || if mansion.game_over_overlay.get() { "game-over-overlay" } else { "game-over-overlay hidden" }
            >
                <p class="game-over-title">"GAME OVER"</p>
                <button
                    id="back-to-start"
                    on:click=move |_| home_url.with_value(|url| dom::navigate_home(url.as_deref()))
                >
                    "スタートに戻る"
                </button>
            </div>

            <div
                id="flash-overlay"
                class=move || if mansion.flash.get() { "flash-overlay active" } else { "flash-overlay hidden" }
            ></div>
        </div>
    }
}
