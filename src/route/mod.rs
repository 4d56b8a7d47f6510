pub mod facets;
pub mod hub_list;
pub mod structured;

use std::sync::MutexGuard;

use axum::http::StatusCode;

use crate::catalog::{keeper, Keeper};
use crate::locale::Locale;

fn lock_keeper(keeper: &keeper::ArcMutex) -> Result<MutexGuard<'_, Keeper>, StatusCode> {
    keeper.lock().map_err(|err| {
        eprintln!("Failed to lock catalog data: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

// The routing layer owns the locale segment; anything outside the supported
// set is simply not a page.
fn parse_locale(value: &str) -> Result<Locale, StatusCode> {
    Locale::parse(value).ok_or(StatusCode::NOT_FOUND)
}
