//! Mansion Game Endpoints

use serde::Serialize;

use super::{post_json, ApiError};
use crate::config::{MANSION_CHOOSE_URL, MANSION_START_URL};
use crate::models::{Direction, MansionState};

#[derive(Serialize)]
struct ChooseArgs {
    direction: Direction,
}

pub async fn start_mansion() -> Result<MansionState, ApiError> {
    post_json::<(), _>(MANSION_START_URL, None).await
}

pub async fn choose_glass(direction: Direction) -> Result<MansionState, ApiError> {
    post_json(MANSION_CHOOSE_URL, Some(&ChooseArgs { direction })).await
}
