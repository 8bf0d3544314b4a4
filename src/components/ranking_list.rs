//! Ranking List Component

use leptos::prelude::*;

use crate::context::use_memory;
use crate::store::MemorySessionStoreFields;

/// Today's ranking, or the loading / empty / error message
#[component]
pub fn RankingList() -> impl IntoView {
    let store = use_memory().store();

    view! {
        <div id="ranking-content">
            {move || {
                let ranking = store.ranking().get();
                match ranking.message() {
                    Some(message) => view! { <p>{message}</p> }.into_any(),
                    None => ranking
                        .entries()
                        .iter()
                        .cloned()
                        .map(|entry| view! {
                            <div class="ranking-item">
                                <span class="rank">{entry.rank}</span>
                                <span class="player-name">{entry.name}</span>
                                <span class="stat">
                                    <span class="stat-label">"スコア"</span>
                                    <span class="stat-value">{entry.score}</span>
                                </span>
                            </div>
                        })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}
