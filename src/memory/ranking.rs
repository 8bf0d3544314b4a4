//! Ranking View Model

use crate::api::ApiError;
use crate::models::RankingEntry;

pub const RANKING_LOADING: &str = "ランキングを読み込み中...";
pub const RANKING_EMPTY: &str = "本日の記録がまだありません。";
pub const RANKING_FAILED: &str = "ランキングの読み込みに失敗しました。";

/// What the ranking panel shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RankingView {
    #[default]
    Idle,
    Loading,
    Empty,
    Failed,
    Entries(Vec<RankingEntry>),
}

impl RankingView {
    pub fn from_result(result: Result<Vec<RankingEntry>, ApiError>) -> Self {
        match result {
            Ok(entries) if entries.is_empty() => RankingView::Empty,
            Ok(entries) => RankingView::Entries(entries),
            Err(_) => RankingView::Failed,
        }
    }

    /// Placeholder text, if the panel shows a message instead of rows
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RankingView::Loading => Some(RANKING_LOADING),
            RankingView::Empty => Some(RANKING_EMPTY),
            RankingView::Failed => Some(RANKING_FAILED),
            RankingView::Idle | RankingView::Entries(_) => None,
        }
    }

    pub fn entries(&self) -> &[RankingEntry] {
        match self {
            RankingView::Entries(entries) => entries,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, name: &str, score: i64) -> RankingEntry {
        RankingEntry { rank, name: name.to_string(), score }
    }

    #[test]
    fn test_empty_ranking_shows_message() {
        let view = RankingView::from_result(Ok(vec![]));
        assert_eq!(view, RankingView::Empty);
        assert_eq!(view.message(), Some("本日の記録がまだありません。"));
        assert!(view.entries().is_empty());
    }

    #[test]
    fn test_entries_keep_server_order() {
        let rows = vec![entry(1, "hanako", 80), entry(2, "taro", 90), entry(3, "jiro", 10)];
        let view = RankingView::from_result(Ok(rows.clone()));
        assert_eq!(view.message(), None);
        assert_eq!(view.entries(), rows.as_slice());
    }

    #[test]
    fn test_failure_shows_error_message() {
        let view = RankingView::from_result(Err(ApiError::Status(503)));
        assert_eq!(view.message(), Some(RANKING_FAILED));
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(RankingView::default().message(), None);
        assert_eq!(RankingView::Loading.message(), Some(RANKING_LOADING));
    }
}
