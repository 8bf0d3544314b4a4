//! Start Screen Component
//!
//! Player name entry with start and reset buttons.

use leptos::prelude::*;

use crate::context::use_memory;
use crate::memory::RESET_DISABLED_TITLE;
use crate::store::{store_screen_class, MemorySessionStoreFields, Screen};

#[component]
pub fn StartScreen() -> impl IntoView {
    let memory = use_memory();
    let store = memory.store();

    view! {
        <section id="start-screen" class=move || store_screen_class(&store, Screen::Start)>
            <h1>"🎮 神経衰弱ゲーム"</h1>
            <p class="start-lead">"ペアを見つけてスコアを稼ごう！"</p>
            <div class="player-name-row">
                <input
                    id="player-name-input"
                    type="text"
                    placeholder="名前を入力"
                    prop:value=move || store.name_input().get()
                    on:input=move |ev| store.name_input().set(event_target_value(&ev))
                    on:keypress=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            memory.start();
                        }
                    }
                />
                <button id="start-game-btn" on:click=move |_| memory.start()>
                    "スタート"
                </button>
                <button
                    id="reset-game-btn"
                    prop:disabled=move || !memory.reset_enabled()
                    title=move || if memory.reset_enabled() { "" } else { RESET_DISABLED_TITLE }
                    on:click=move |_| memory.reset_in_progress()
                >
                    "リセット"
                </button>
            </div>
        </section>
    }
}
