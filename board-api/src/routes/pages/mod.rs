//! Server-rendered HTML pages: the board and the entry detail page.

mod assets;
mod board;
mod card;
mod entry;
mod flash;
mod layout;

use axum::{
    routing::{get, post},
    Router,
};

use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(board::board_page))
        .route("/entries", post(board::create_entry))
        .route("/entries/:id", get(entry::entry_page).post(entry::save_entry))
        .route("/entries/:id/delete", post(entry::delete_entry))
}
