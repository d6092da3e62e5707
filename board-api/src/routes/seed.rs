use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    adapters::inbound::http::{EntryResponse, SeedResponse},
    app_state::AppState,
    domain::models::{EntryStatus, NewEntry},
};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(seed))
}

/// Sample board, one entry per column.
pub fn seed_entries() -> Vec<NewEntry> {
    vec![
        NewEntry::new("Pending: draft the onboarding checklist for new contributors")
            .with_status(EntryStatus::Pending),
        NewEntry::new("In progress: migrate the board to the new storage layer")
            .with_status(EntryStatus::InProgress),
        NewEntry::new("Finished: set up continuous integration for the repository")
            .with_status(EntryStatus::Finished),
    ]
}

#[instrument(name = "POST /api/seed", skip(app_state))]
async fn seed(State(app_state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    let entries = app_state.entry_service.seed(seed_entries()).await?;

    Ok(Json(SeedResponse {
        message: "Board seeded".to_string(),
        entries: entries.into_iter().map(EntryResponse::from).collect(),
    }))
}
