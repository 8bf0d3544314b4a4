//! Party Games App
//!
//! Mounts the game this page hosts; the memory game lives here, the mansion
//! game in `mansion_app`.

use leptos::prelude::*;

use crate::components::{MemoryBoard, ResultScreen, StartScreen};
use crate::config::{AppConfig, Page};
use crate::mansion_app::MansionApp;
use crate::memory::MemoryController;
use crate::store::{store_screen_class, MemorySessionStoreFields, Screen};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let page = config.page;
    provide_context(config);

    match page {
        Page::Memory => view! { <MemoryApp /> }.into_any(),
        Page::Mansion => view! { <MansionApp /> }.into_any(),
    }
}

/// Start, game and result screens of the memory game
#[component]
pub fn MemoryApp() -> impl IntoView {
    let memory = MemoryController::new();
    let store = memory.store();
    provide_context(memory);
    provide_context(store);

    view! {
        <div class="memory-app">
            <StartScreen />

            <section id="game-screen" class=move || store_screen_class(&store, Screen::Game)>
                <MemoryBoard />
            </section>

            <ResultScreen />

            <p id="status-message" class="status-message">{move || store.status().get()}</p>
        </div>
    }
}
