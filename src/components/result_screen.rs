//! Result Screen Component
//!
//! Final score of the finished game, today's ranking, restart / return buttons.

use leptos::prelude::*;

use super::RankingList;
use crate::context::use_memory;
use crate::store::{store_screen_class, MemorySessionStoreFields, Screen};

#[component]
pub fn ResultScreen() -> impl IntoView {
    let memory = use_memory();
    let store = memory.store();

    view! {
        <section id="result-screen" class=move || store_screen_class(&store, Screen::Result)>
            <h2>"結果"</h2>
            <div id="final-scores-content">
                {move || store.final_score().get().map(|result| view! {
                    <div class="final-score-item">
                        <span class="rank">"🏆"</span>
                        <span>{result.player_name}</span>
                        <span><strong>{result.score}</strong>"点"</span>
                    </div>
                    <div class="final-score-detail">
                        <p>"試行: " {result.attempts}</p>
                        <p>"ミス: " {result.mistakes}</p>
                    </div>
                })}
            </div>

            <h3>"本日のランキング"</h3>
            <RankingList />

            <div class="result-actions">
                <button id="restart-btn" on:click=move |_| memory.restart()>
                    "もう一度"
                </button>
                <button id="return-btn" on:click=move |_| memory.return_to_start()>
                    "スタートに戻る"
                </button>
            </div>
        </section>
    }
}
