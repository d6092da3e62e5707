use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::EntryResponse,
    app_state::AppState,
    domain::{
        models::{EntryId, EntryStatus, EntryUpdate},
        EntryError,
    },
};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route(
            "/:id",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
}

#[instrument(name = "GET /api/entries", skip(app_state))]
async fn list_entries(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<EntryResponse>>, ApiError> {
    let entries = app_state.entry_service.list_entries().await?;

    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateEntryBody {
    #[serde(default)]
    description: String,
}

#[instrument(name = "POST /api/entries", skip(app_state))]
async fn create_entry(
    State(app_state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateEntryBody>, ApiError>,
) -> Result<(StatusCode, Json<EntryResponse>), ApiError> {
    let entry = app_state
        .entry_service
        .create_entry(body.description)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[instrument(name = "GET /api/entries/:id", skip(app_state))]
async fn get_entry(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntryResponse>, ApiError> {
    let id: EntryId = id.parse()?;

    let entry = app_state
        .entry_service
        .get_entry(&id)
        .await?
        .ok_or(EntryError::NotFound(id))?;

    Ok(Json(entry.into()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateEntryBody {
    description: Option<String>,
    status: Option<String>,
}

impl UpdateEntryBody {
    fn into_update(self) -> Result<EntryUpdate, EntryError> {
        let status = self
            .status
            .map(|raw| {
                raw.parse::<EntryStatus>()
                    .map_err(|_| EntryError::InvalidStatus(raw))
            })
            .transpose()?;

        Ok(EntryUpdate {
            description: self.description,
            status,
        })
    }
}

#[instrument(name = "PUT /api/entries/:id", skip(app_state))]
async fn update_entry(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateEntryBody>, ApiError>,
) -> Result<Json<EntryResponse>, ApiError> {
    let id: EntryId = id.parse()?;
    let update = body.into_update()?;

    let entry = app_state.entry_service.update_entry(&id, update).await?;

    Ok(Json(entry.into()))
}

#[instrument(name = "DELETE /api/entries/:id", skip(app_state))]
async fn delete_entry(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntryResponse>, ApiError> {
    let id: EntryId = id.parse()?;

    let entry = app_state.entry_service.delete_entry(&id).await?;

    Ok(Json(entry.into()))
}
