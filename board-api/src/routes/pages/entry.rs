use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{
        models::{is_blank, Entry, EntryId, EntryStatus, EntryUpdate},
        EntryError,
    },
    routes::ApiError,
    utils::relative_time::format_distance_to_now,
};

use super::{
    assets::ENTRY_SCRIPT,
    flash::{self, Flash},
    layout::{escape, layout},
};

const EMPTY_DESCRIPTION_HELP: &str = "This field cannot be empty";

/// Editable state of the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub description: String,
    pub status: EntryStatus,
    /// Set once the description field lost focus or a save was attempted.
    pub touched: bool,
}

impl EntryForm {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            description: entry.description.clone(),
            status: entry.status,
            touched: false,
        }
    }

    pub fn is_not_valid(&self) -> bool {
        self.touched && is_blank(&self.description)
    }

    pub fn can_save(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Load the entry server-side; unknown or malformed ids go back to the board.
async fn load_entry(app_state: &AppState, raw_id: &str) -> Result<Option<Entry>, ApiError> {
    let Ok(id) = raw_id.parse::<EntryId>() else {
        return Ok(None);
    };

    Ok(app_state.entry_service.get_entry(&id).await?)
}

#[instrument(name = "GET /entries/:id", skip(app_state))]
pub async fn entry_page(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(entry) = load_entry(&app_state, &id).await? else {
        return Ok(Redirect::temporary("/").into_response());
    };

    let form = EntryForm::from_entry(&entry);
    Ok(render_entry(&entry, &form).into_response())
}

#[derive(Debug, Deserialize)]
pub struct EntryFormBody {
    #[serde(default)]
    description: String,
    status: Option<String>,
}

#[instrument(name = "POST /entries/:id", skip(app_state, jar))]
pub async fn save_entry(
    jar: CookieJar,
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Form(body): Form<EntryFormBody>,
) -> Result<Response, ApiError> {
    let Some(entry) = load_entry(&app_state, &id).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let status = match body.status {
        Some(raw) => raw
            .parse::<EntryStatus>()
            .map_err(|_| EntryError::InvalidStatus(raw))?,
        None => entry.status,
    };

    let form = EntryForm {
        description: body.description,
        status,
        touched: true,
    };
    if is_blank(&form.description) {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, render_entry(&entry, &form)).into_response());
    }

    let update = EntryUpdate {
        description: Some(form.description),
        status: Some(form.status),
    };
    match app_state.entry_service.update_entry(&entry.id, update).await {
        Ok(_) => Ok((flash::set(jar, Flash::EntryUpdated), Redirect::to("/")).into_response()),
        // Deleted between load and save.
        Err(EntryError::NotFound(_)) => Ok(Redirect::to("/").into_response()),
        Err(e) => Err(e.into()),
    }
}

#[instrument(name = "POST /entries/:id/delete", skip(app_state, jar))]
pub async fn delete_entry(
    jar: CookieJar,
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(id) = id.parse::<EntryId>() else {
        return Ok(Redirect::to("/").into_response());
    };

    match app_state.entry_service.delete_entry(&id).await {
        Ok(_) => Ok((flash::set(jar, Flash::EntryDeleted), Redirect::to("/")).into_response()),
        Err(EntryError::NotFound(_)) => Ok(Redirect::to("/").into_response()),
        Err(e) => Err(e.into()),
    }
}

fn render_entry(entry: &Entry, form: &EntryForm) -> Html<String> {
    let radios: String = EntryStatus::ALL
        .iter()
        .map(|status| {
            let checked = if *status == form.status { " checked" } else { "" };
            format!(
                r#"<label><input type="radio" name="status" value="{status}"{checked}> {label}</label>"#,
                label = status.label(),
            )
        })
        .collect();

    let field_class = if form.is_not_valid() {
        "field error"
    } else {
        "field"
    };
    let disabled = if form.can_save() { "" } else { " disabled" };

    let body = format!(
        r#"<div class="card">
<h1>Entry</h1>
<p class="subheader">Created {created}</p>
<form method="post" action="/entries/{id}">
<div class="{field_class}" data-description-field data-touched="{touched}">
<label for="description">New entry</label>
<textarea id="description" name="description" placeholder="New entry" autofocus>
{description}</textarea>
<span class="helper">{help}</span>
</div>
<fieldset class="status-group">
<legend>Status:</legend>
{radios}
</fieldset>
<button type="submit" class="save" data-save{disabled}>Save</button>
</form>
</div>
<form method="post" action="/entries/{id}/delete">
<button type="submit" class="delete" title="Delete entry">&#x1F5D1;</button>
</form>"#,
        id = entry.id,
        created = escape(&format_distance_to_now(entry.created_at)),
        touched = form.touched,
        description = escape(&form.description),
        help = EMPTY_DESCRIPTION_HELP,
    );

    let title = Entry {
        description: form.description.clone(),
        ..entry.clone()
    }
    .title();

    layout(&title, &body, Some(ENTRY_SCRIPT))
}
