//! Memory Game State
//!
//! Client-local bookkeeping for one play-through: flips, matches, lock and score.
//! The server decides whether two cards match; everything else lives here.

use crate::config::{MAX_MISTAKES, POINTS_PER_PAIR, SPECIAL_BONUS, SPECIAL_IMAGE};
use crate::models::Card;

/// Result of a click on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Locked, already face-up, or two cards already flipped
    Ignored,
    /// First card of a pair is face-up
    Flipped,
    /// Second card flipped; the pair must be checked
    PairReady(usize, usize),
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    MistakeLimit,
    AllMatched,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryGameState {
    /// Face-up, unmatched cards in click order (at most 2)
    pub flipped: Vec<usize>,
    /// Matched cards in match order
    pub matched: Vec<usize>,
    /// Input is suspended while a pair is being checked
    pub locked: bool,
    pub attempts: u32,
    pub mistakes: u32,
    pub score: u32,
    pub pairs_matched: u32,
    pub special_bonus: u32,
    /// Set once the game has ended; the board takes no more input
    pub finished: bool,
}

impl MemoryGameState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.recalc_score();
        state
    }

    pub fn is_matched(&self, idx: usize) -> bool {
        self.matched.contains(&idx)
    }

    pub fn is_flipped(&self, idx: usize) -> bool {
        self.flipped.contains(&idx)
    }

    /// Turn a card face-up if the board accepts input
    pub fn flip(&mut self, idx: usize) -> FlipOutcome {
        if self.finished || self.locked || self.is_matched(idx) || self.is_flipped(idx) || self.flipped.len() >= 2 {
            return FlipOutcome::Ignored;
        }

        self.flipped.push(idx);
        match self.flipped.as_slice() {
            [first, second] => FlipOutcome::PairReady(*first, *second),
            _ => FlipOutcome::Flipped,
        }
    }

    /// Lock the board and count the attempt. `None` unless exactly two cards are up.
    pub fn begin_check(&mut self) -> Option<(usize, usize)> {
        if self.finished {
            return None;
        }
        let pair = match self.flipped.as_slice() {
            [first, second] => (*first, *second),
            _ => return None,
        };
        self.locked = true;
        self.attempts += 1;
        Some(pair)
    }

    /// The server confirmed the flipped pair
    pub fn record_match(&mut self, card1: &Card, card2: &Card) {
        self.pairs_matched += 1;
        if self.special_bonus == 0 && (card1.image == SPECIAL_IMAGE || card2.image == SPECIAL_IMAGE) {
            self.special_bonus = SPECIAL_BONUS;
        }
        self.recalc_score();
        self.matched.append(&mut self.flipped);
        self.locked = false;
    }

    /// The server rejected the pair; cards stay up until `clear_mismatch`
    pub fn record_mismatch(&mut self) {
        self.mistakes += 1;
    }

    pub fn clear_mismatch(&mut self) {
        self.flipped.clear();
        self.locked = false;
        self.recalc_score();
    }

    /// The check could not complete; turn the pair back down so it can be retried
    pub fn abort_check(&mut self) {
        self.flipped.clear();
        self.locked = false;
    }

    pub fn recalc_score(&mut self) {
        self.score = self.pairs_matched * POINTS_PER_PAIR + self.special_bonus;
    }

    /// Mistake limit is checked before completion
    pub fn end_state(&self, deck_len: usize) -> Option<GameEnd> {
        if self.mistakes >= MAX_MISTAKES {
            Some(GameEnd::MistakeLimit)
        } else if self.matched.len() == deck_len {
            Some(GameEnd::AllMatched)
        } else {
            None
        }
    }

    /// Close the board if the game is over. Returns the end reason only the first time.
    pub fn finish_if_over(&mut self, deck_len: usize) -> Option<GameEnd> {
        if self.finished {
            return None;
        }
        let end = self.end_state(deck_len)?;
        self.finished = true;
        self.locked = true;
        self.flipped.clear();
        Some(end)
    }

    /// `試行: a | ミス: m/3`
    pub fn info_line(&self) -> String {
        format!("試行: {} | ミス: {}/{}", self.attempts, self.mistakes, MAX_MISTAKES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(pairs: u32) -> Vec<Card> {
        (0..pairs * 2)
            .map(|i| Card {
                id: format!("card_{}", i),
                image: format!("IMG_{:04}.jpeg", i / 2 + 1),
                pair_id: i / 2,
            })
            .collect()
    }

    /// Flip two cards and apply the server verdict
    fn play_pair(state: &mut MemoryGameState, cards: &[Card], a: usize, b: usize, is_match: bool) {
        assert_eq!(state.flip(a), FlipOutcome::Flipped);
        assert_eq!(state.flip(b), FlipOutcome::PairReady(a, b));
        assert_eq!(state.begin_check(), Some((a, b)));
        if is_match {
            state.record_match(&cards[a], &cards[b]);
        } else {
            state.record_mismatch();
            state.clear_mismatch();
        }
    }

    #[test]
    fn test_new_state_is_blank() {
        let state = MemoryGameState::new();
        assert_eq!(state.score, 0);
        assert!(!state.locked);
        assert!(state.flipped.is_empty());
        assert_eq!(state.info_line(), "試行: 0 | ミス: 0/3");
    }

    #[test]
    fn test_flip_ignores_repeat_and_third_card() {
        let mut state = MemoryGameState::new();
        assert_eq!(state.flip(0), FlipOutcome::Flipped);
        assert_eq!(state.flip(0), FlipOutcome::Ignored);
        assert_eq!(state.flip(3), FlipOutcome::PairReady(0, 3));
        assert_eq!(state.flip(5), FlipOutcome::Ignored);
        assert_eq!(state.flipped, vec![0, 3]);
    }

    #[test]
    fn test_flip_ignored_while_locked_or_matched() {
        let cards = deck(8);
        let mut state = MemoryGameState::new();
        play_pair(&mut state, &cards, 0, 1, true);
        assert_eq!(state.flip(1), FlipOutcome::Ignored);

        state.locked = true;
        assert_eq!(state.flip(4), FlipOutcome::Ignored);
        assert!(state.flipped.is_empty());
    }

    #[test]
    fn test_begin_check_locks_and_counts() {
        let mut state = MemoryGameState::new();
        assert_eq!(state.begin_check(), None);
        state.flip(2);
        state.flip(7);
        assert_eq!(state.begin_check(), Some((2, 7)));
        assert!(state.locked);
        assert_eq!(state.attempts, 1);
    }

    #[test]
    fn test_mismatch_keeps_cards_up_until_cleared() {
        let mut state = MemoryGameState::new();
        state.flip(0);
        state.flip(2);
        state.begin_check();
        state.record_mismatch();
        assert_eq!(state.flipped, vec![0, 2]);
        assert_eq!(state.flip(4), FlipOutcome::Ignored);

        state.clear_mismatch();
        assert!(state.flipped.is_empty());
        assert!(!state.locked);
        assert_eq!(state.mistakes, 1);
    }

    #[test]
    fn test_score_without_special_image() {
        let cards = deck(8);
        let mut state = MemoryGameState::new();
        play_pair(&mut state, &cards, 0, 1, true);
        play_pair(&mut state, &cards, 2, 3, true);
        play_pair(&mut state, &cards, 4, 6, false);
        play_pair(&mut state, &cards, 4, 5, true);
        assert_eq!(state.pairs_matched, 3);
        assert_eq!(state.score, 10 * state.pairs_matched);
        assert_eq!(state.matched, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_special_bonus_granted_once() {
        let mut cards = deck(8);
        for idx in [0, 1, 2, 3] {
            cards[idx].image = SPECIAL_IMAGE.to_string();
        }
        let mut state = MemoryGameState::new();
        play_pair(&mut state, &cards, 0, 1, true);
        assert_eq!(state.special_bonus, 30);
        assert_eq!(state.score, 40);

        play_pair(&mut state, &cards, 2, 3, true);
        assert_eq!(state.special_bonus, 30);
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_two_mismatches_then_match() {
        let cards = deck(8);
        let mut state = MemoryGameState::new();
        play_pair(&mut state, &cards, 0, 2, false);
        play_pair(&mut state, &cards, 0, 2, false);
        play_pair(&mut state, &cards, 0, 1, true);

        assert_eq!(state.mistakes, 2);
        assert_eq!(state.pairs_matched, 1);
        assert_eq!(state.score, 10);
        assert_eq!(state.attempts, 3);
        assert_eq!(state.end_state(cards.len()), None);
    }

    #[test]
    fn test_all_matched_ends_game() {
        let cards = deck(2);
        let mut state = MemoryGameState::new();
        play_pair(&mut state, &cards, 0, 1, true);
        assert_eq!(state.end_state(cards.len()), None);
        play_pair(&mut state, &cards, 2, 3, true);
        assert_eq!(state.end_state(cards.len()), Some(GameEnd::AllMatched));
    }

    #[test]
    fn test_mistake_limit_wins_over_completion() {
        let cards = deck(1);
        let mut state = MemoryGameState::new();
        state.mistakes = 2;
        state.flip(0);
        state.flip(1);
        state.begin_check();
        state.record_match(&cards[0], &cards[1]);
        state.mistakes = 3;
        // Every card is matched, but the mistake limit is reported
        assert_eq!(state.end_state(cards.len()), Some(GameEnd::MistakeLimit));
    }

    #[test]
    fn test_abort_check_allows_retry() {
        let mut state = MemoryGameState::new();
        state.flip(0);
        state.flip(1);
        state.begin_check();
        state.abort_check();
        assert!(!state.locked);
        assert!(state.flipped.is_empty());
        assert_eq!(state.attempts, 1);
        assert_eq!(state.flip(0), FlipOutcome::Flipped);
    }

    #[test]
    fn test_board_closed_after_mistake_limit() {
        let cards = deck(8);
        let mut state = MemoryGameState::new();
        play_pair(&mut state, &cards, 0, 2, false);
        play_pair(&mut state, &cards, 0, 2, false);
        play_pair(&mut state, &cards, 0, 2, false);
        assert_eq!(state.finish_if_over(cards.len()), Some(GameEnd::MistakeLimit));

        assert_eq!(state.flip(4), FlipOutcome::Ignored);
        assert_eq!(state.flip(6), FlipOutcome::Ignored);
        assert_eq!(state.begin_check(), None);
        assert_eq!(state.attempts, 3);
        assert_eq!(state.mistakes, 3);
        // The end is reported once, so final stats are posted once
        assert_eq!(state.finish_if_over(cards.len()), None);
    }

    #[test]
    fn test_finish_if_over_leaves_running_game_open() {
        let cards = deck(2);
        let mut state = MemoryGameState::new();
        play_pair(&mut state, &cards, 0, 1, true);
        assert_eq!(state.finish_if_over(cards.len()), None);
        assert!(!state.finished);

        play_pair(&mut state, &cards, 2, 3, true);
        assert_eq!(state.finish_if_over(cards.len()), Some(GameEnd::AllMatched));
        assert!(state.finished);
        assert!(state.locked);
        assert_eq!(state.flip(0), FlipOutcome::Ignored);
    }
}
