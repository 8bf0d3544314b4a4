//! Memory Game Session Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store per page,
//! holding the player, the dealt deck and the state of the current play-through.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::memory::{MemoryGameState, RankingView};
use crate::models::Card;

/// Which screen of the memory game is visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Start,
    Game,
    Result,
}

/// Snapshot shown on the result screen
#[derive(Clone, Debug, PartialEq)]
pub struct FinalScore {
    pub player_name: String,
    pub score: u32,
    pub attempts: u32,
    pub mistakes: u32,
}

/// Memory game session with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MemorySession {
    pub screen: Screen,
    /// Text currently in the name input
    pub name_input: String,
    /// Name the current deck was dealt for (empty = no session)
    pub player_name: String,
    pub deck: Vec<Card>,
    /// Present from game start until return-to-start
    pub play: Option<MemoryGameState>,
    pub status: String,
    pub final_score: Option<FinalScore>,
    pub ranking: RankingView,
}

/// Type alias for the store
pub type MemoryStore = Store<MemorySession>;

/// Get the memory store from context
pub fn use_memory_store() -> MemoryStore {
    expect_context::<MemoryStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_status(store: &MemoryStore, message: &str) {
    store.status().set(message.to_string());
}

/// Mutate the running game, if any
pub fn store_update_play<U>(
    store: &MemoryStore,
    fun: impl FnOnce(&mut MemoryGameState) -> U,
) -> Option<U> {
    store.play().try_update(|play| play.as_mut().map(fun)).flatten()
}

/// True while a deck is held for a named player
pub fn store_has_session(store: &MemoryStore) -> bool {
    store
        .player_name()
        .with_untracked(|name| store.deck().with_untracked(|deck| has_session(name, deck)))
}

/// A dealt deck counts as a session even if play never began
pub fn has_session(player_name: &str, deck: &[Card]) -> bool {
    !player_name.is_empty() && !deck.is_empty()
}

/// `screen` class list, hidden unless `screen` is the current one
pub fn store_screen_class(store: &MemoryStore, screen: Screen) -> &'static str {
    if store.screen().get() == screen {
        "screen"
    } else {
        "screen hidden"
    }
}

/// Drop player, deck and game state
pub fn store_clear_session(store: &MemoryStore) {
    store.player_name().set(String::new());
    store.deck().set(Vec::new());
    store.play().set(None);
    store.final_score().set(None);
    store.ranking().set(RankingView::Idle);
}
