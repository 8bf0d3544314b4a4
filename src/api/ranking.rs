//! Ranking Endpoint

use super::{get_json, ApiError};
use crate::config::RANKING_URL;
use crate::models::RankingEntry;

/// Today's ranking, best score first (server order is kept)
pub async fn load_today_ranking() -> Result<Vec<RankingEntry>, ApiError> {
    get_json(RANKING_URL).await
}
