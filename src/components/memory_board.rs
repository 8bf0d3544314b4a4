//! Memory Board Component
//!
//! Card grid plus the attempts/mistakes line and current score.

use leptos::either::Either;
use leptos::prelude::*;

use crate::config::{image_url, BOARD_COLUMNS};
use crate::context::use_memory;
use crate::store::MemorySessionStoreFields;

/// How a single card is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CardFace {
    Down,
    Flipped,
    Matched,
}

impl CardFace {
    fn class(self) -> &'static str {
        match self {
            CardFace::Down => "memory-card",
            CardFace::Flipped => "memory-card flipped",
            CardFace::Matched => "memory-card matched",
        }
    }
}

#[component]
pub fn MemoryBoard() -> impl IntoView {
    let memory = use_memory();
    let store = memory.store();

    let info_line = move || {
        store
            .play()
            .with(|play| play.as_ref().map(|p| p.info_line()))
            .unwrap_or_default()
    };
    let score = move || store.play().with(|play| play.as_ref().map_or(0, |p| p.score));

    view! {
        <div class="memory-header">
            <span id="memory-info">{info_line}</span>
            <span class="score-label">"スコア: "<span id="current-score">{score}</span></span>
        </div>
        <div
            id="memory-board"
            class="memory-board"
            style=format!("grid-template-columns: repeat({}, 1fr)", BOARD_COLUMNS)
        >
            <For
                each={move || store.deck().get().into_iter().enumerate().collect::<Vec<_>>()}
                key={|(idx, card)| (*idx, card.id.clone())}
                children={move |(idx, card)| {
                    let face = move || {
                        store.play().with(|play| match play {
                            Some(p) if p.is_matched(idx) => CardFace::Matched,
                            Some(p) if p.is_flipped(idx) => CardFace::Flipped,
                            _ => CardFace::Down,
                        })
                    };
                    let src = image_url(&card.image);

                    view! {
                        <div
                            class=move || face().class()
                            data-idx=idx.to_string()
                            on:click=move |_| memory.flip(idx)
                        >
                            {move || match face() {
                                CardFace::Down => Either::Left("🎴"),
                                _ => Either::Right(view! { <img src=src.clone() alt="photo" /> }),
                            }}
                        </div>
                    }
                }}
            />
        </div>
    }
}
