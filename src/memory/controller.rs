//! Memory Game Controller
//!
//! Turns clicks into state changes and server round-trips. All state lives in
//! the session store; the controller is a `Copy` handle over it.

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::deck::{invalid_card_labels, shuffle_deck, validate_cards};
use super::ranking::RankingView;
use super::state::{FlipOutcome, GameEnd, MemoryGameState};
use crate::api::{self, log_failure, FinishArgs};
use crate::config::{MATCH_CHECK_DELAY_MS, MISMATCH_HOLD_MS};
use crate::dom;
use crate::store::{
    store_clear_session, store_has_session, store_set_status, store_update_play,
    FinalScore, MemorySession, MemorySessionStoreFields, MemoryStore, Screen,
};

const TAG: &str = "MEMORY";

// ========================
// Messages
// ========================

pub const NAME_REQUIRED: &str = "名前を入力してください";
pub const PREPARING: &str = "ゲームを準備中...";
pub const START_FAILED: &str = "ゲームの開始に失敗しました。再度お試しください。";
pub const NETWORK_ERROR: &str = "通信エラーが発生しました。";
pub const CONFIRM_INVALID_DECK: &str = "カード構成に重複または欠落があります。続行しますか？";
pub const INVALID_DECK_ABORTED: &str = "カード構成が不正なため開始を中止しました。";
pub const INVALID_DECK_CONTINUED: &str = "カード構成に不備がありますが、続行します。";
pub const READY: &str = "カードをめくってペアを見つけよう！";
pub const CHECKING: &str = "カードを確認中...";
pub const MATCHED: &str = "マッチ！よくできました！";
pub const MISMATCHED: &str = "残念！もう一度挑戦してみよう！";
pub const MISTAKE_LIMIT: &str = "ミスが3回に達したのでゲームオーバーです。";
pub const SAVING: &str = "スコアを保存しています...";
pub const RESTARTING: &str = "リスタートしています...";
pub const RESET_BLOCKED: &str = "現在のゲームが進行中なので、リセットはできません。";
pub const RESET_DISABLED_TITLE: &str = "現在のゲーム中はリセットできません";

/// Handle to the memory game session, provided via context
#[derive(Clone, Copy)]
pub struct MemoryController {
    store: MemoryStore,
}

impl MemoryController {
    pub fn new() -> Self {
        Self {
            store: Store::new(MemorySession::default()),
        }
    }

    pub fn store(&self) -> MemoryStore {
        self.store
    }

    /// Start a game for the name in the input
    pub fn start(self) {
        spawn_local(self.start_game());
    }

    async fn start_game(self) {
        let name = self.store.name_input().get_untracked().trim().to_string();
        if name.is_empty() {
            dom::alert(NAME_REQUIRED);
            return;
        }

        self.store.player_name().set(name.clone());
        self.store.name_input().set(name.clone());
        store_set_status(&self.store, PREPARING);

        let response = match api::start_memory_game(&name).await {
            Ok(response) => response,
            Err(err) => {
                log_failure(TAG, "start failed", &err);
                dom::alert(START_FAILED);
                store_set_status(&self.store, NETWORK_ERROR);
                return;
            }
        };

        let mut status = READY;
        let invalid = validate_cards(&response.cards);
        let card_count = response.cards.len();
        self.store.deck().set(response.cards);
        if !invalid.is_empty() {
            let labels = invalid_card_labels(&invalid);
            warn!("[{}] invalid card layout: {}", TAG, labels);
            if !dom::confirm(&format!("{}\n\n{}", CONFIRM_INVALID_DECK, labels)) {
                store_set_status(&self.store, INVALID_DECK_ABORTED);
                return;
            }
            status = INVALID_DECK_CONTINUED;
        }

        log!("[{}] dealt {} cards for {}", TAG, card_count, name);
        self.begin_play(status);
        self.store.screen().set(Screen::Game);
    }

    fn begin_play(self, status: &str) {
        self.store.play().set(Some(MemoryGameState::new()));
        self.store.final_score().set(None);
        store_set_status(&self.store, status);
    }

    /// Click on board card `idx`
    pub fn flip(self, idx: usize) {
        if idx >= self.store.deck().read_untracked().len() {
            return;
        }
        if let Some(FlipOutcome::PairReady(..)) = store_update_play(&self.store, |play| play.flip(idx)) {
            spawn_local(self.check_match());
        }
    }

    async fn check_match(self) {
        let Some((idx1, idx2)) = store_update_play(&self.store, |play| play.begin_check()).flatten() else {
            return;
        };
        let deck = self.store.deck().get_untracked();
        let (Some(card1), Some(card2)) = (deck.get(idx1), deck.get(idx2)) else {
            store_update_play(&self.store, |play| play.abort_check());
            return;
        };

        store_set_status(&self.store, CHECKING);

        dom::wait_for_card_image(idx1).await;
        dom::wait_for_card_image(idx2).await;
        TimeoutFuture::new(MATCH_CHECK_DELAY_MS).await;

        match api::check_match(card1, card2).await {
            Ok(result) if result.is_match => {
                store_update_play(&self.store, |play| play.record_match(card1, card2));
                store_set_status(&self.store, MATCHED);
            }
            Ok(_) => {
                store_update_play(&self.store, |play| play.record_mismatch());
                store_set_status(&self.store, MISMATCHED);
                TimeoutFuture::new(MISMATCH_HOLD_MS).await;
                store_update_play(&self.store, |play| play.clear_mismatch());
            }
            Err(err) => {
                log_failure(TAG, "match check failed", &err);
                store_update_play(&self.store, |play| play.abort_check());
                store_set_status(&self.store, NETWORK_ERROR);
                return;
            }
        }

        match store_update_play(&self.store, |play| play.finish_if_over(deck.len())).flatten() {
            Some(GameEnd::MistakeLimit) => {
                store_set_status(&self.store, MISTAKE_LIMIT);
                self.finish().await;
            }
            Some(GameEnd::AllMatched) => self.finish().await,
            None => {}
        }
    }

    /// Post final stats, then show results and today's ranking
    async fn finish(self) {
        store_set_status(&self.store, SAVING);

        let Some(play) = self.store.play().get_untracked() else { return };
        let player_name = self.store.player_name().get_untracked();
        let args = FinishArgs {
            player_name: &player_name,
            score: play.score,
            attempts: play.attempts,
            mistakes: play.mistakes,
            pairs_matched: play.pairs_matched,
            special_bonus: play.special_bonus,
        };
        if let Err(err) = api::finish_memory_game(&args).await {
            log_failure(TAG, "saving score failed", &err);
        }

        self.store.final_score().set(Some(FinalScore {
            player_name: player_name.clone(),
            score: play.score,
            attempts: play.attempts,
            mistakes: play.mistakes,
        }));
        self.load_ranking().await;
        self.store.screen().set(Screen::Result);
    }

    async fn load_ranking(self) {
        self.store.ranking().set(RankingView::Loading);
        let result = api::load_today_ranking().await;
        if let Err(err) = &result {
            log_failure(TAG, "loading ranking failed", err);
        }
        self.store.ranking().set(RankingView::from_result(result));
    }

    /// Play again with the same deck, reshuffled locally
    pub fn restart(self) {
        if !store_has_session(&self.store) {
            self.return_to_start();
            return;
        }

        store_set_status(&self.store, RESTARTING);
        self.store
            .deck()
            .update(|deck| shuffle_deck(deck, &mut rand::thread_rng()));
        self.begin_play(READY);
        self.store.screen().set(Screen::Game);
    }

    pub fn return_to_start(self) {
        store_clear_session(&self.store);
        self.store.name_input().set(String::new());
        store_set_status(&self.store, "");
        self.store.screen().set(Screen::Start);
    }

    /// Reset is not allowed while a game is held
    pub fn reset_in_progress(self) {
        if store_has_session(&self.store) {
            store_set_status(&self.store, RESET_BLOCKED);
        }
    }

    /// The reset button is usable only before a game has started
    pub fn reset_enabled(&self) -> bool {
        self.store.play().with(|play| play.is_none())
    }
}
