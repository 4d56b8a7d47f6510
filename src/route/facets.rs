use axum::{extract::State, http::StatusCode, Json};

use crate::{catalog::keeper, collate};

use super::lock_keeper;

pub async fn get(
    State(catalog): State<keeper::ArcMutex>,
) -> Result<Json<collate::Facets>, StatusCode> {
    let keeper = lock_keeper(&catalog)?;

    Ok(Json(collate::facets(keeper.catalog())))
}
