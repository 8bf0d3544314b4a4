//! Memory Game
//!
//! Local play state, deck checks and the controller that drives the board.

mod controller;
mod deck;
mod ranking;
mod state;

pub use controller::*;
pub use deck::{invalid_card_labels, shuffle_deck, validate_cards};
pub use ranking::*;
pub use state::*;
