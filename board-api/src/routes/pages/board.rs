use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::CookieJar;
use itertools::Itertools;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{
        models::{Entry, EntryStatus},
        EntryError,
    },
    routes::ApiError,
};

use super::{
    assets::BOARD_SCRIPT,
    card::entry_card,
    flash::{self, Flash},
    layout::{escape, layout},
};

#[instrument(name = "GET /", skip(app_state, jar))]
pub async fn board_page(
    jar: CookieJar,
    State(app_state): State<AppState>,
) -> Result<(CookieJar, Html<String>), ApiError> {
    let entries = app_state.entry_service.list_entries().await?;
    let (jar, flash) = flash::take(jar);

    Ok((jar, render_board(entries, flash)))
}

#[derive(Debug, Deserialize)]
pub struct NewEntryForm {
    #[serde(default)]
    description: String,
}

#[instrument(name = "POST /entries", skip(app_state, jar))]
pub async fn create_entry(
    jar: CookieJar,
    State(app_state): State<AppState>,
    Form(form): Form<NewEntryForm>,
) -> Result<impl IntoResponse, ApiError> {
    let flash = match app_state.entry_service.create_entry(form.description).await {
        Ok(_) => Flash::EntryCreated,
        Err(EntryError::EmptyDescription) => Flash::EmptyDescription,
        Err(e) => return Err(e.into()),
    };

    Ok((flash::set(jar, flash), Redirect::to("/")))
}

fn render_board(entries: Vec<Entry>, flash: Option<Flash>) -> Html<String> {
    let mut by_status = entries.into_iter().into_group_map_by(|entry| entry.status);

    let columns: String = EntryStatus::ALL
        .iter()
        .map(|status| {
            let cards: String = by_status
                .remove(status)
                .unwrap_or_default()
                .iter()
                .map(entry_card)
                .collect();
            let new_entry = if *status == EntryStatus::Pending {
                NEW_ENTRY_FORM
            } else {
                ""
            };

            format!(
                r#"<section class="column" data-status="{status}">
<h2>{label}</h2>
{new_entry}
{cards}
</section>"#,
                label = status.label(),
            )
        })
        .collect();

    let flash = flash
        .map(|f| format!(r#"<p class="flash" role="status">{}</p>"#, escape(f.message())))
        .unwrap_or_default();

    let body = format!(
        r#"{flash}
<div class="board" data-board>
{columns}
</div>"#
    );

    layout("Entries board", &body, Some(BOARD_SCRIPT))
}

const NEW_ENTRY_FORM: &str = r#"<details class="new-entry">
<summary>Add entry</summary>
<form method="post" action="/entries">
<textarea name="description" placeholder="New entry" required></textarea>
<button type="submit" class="save">Add</button>
</form>
</details>"#;
