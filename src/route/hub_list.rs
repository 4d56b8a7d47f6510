use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::{catalog::keeper, list, present, query::HubQuery};

use super::{lock_keeper, parse_locale};

fn assign_headers(item_count: usize) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert("x-length", item_count.into());

    headers
}

pub async fn get(
    State(catalog): State<keeper::ArcMutex>,
    Path(locale): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<(HeaderMap, Json<present::HubPage>), StatusCode> {
    let locale = parse_locale(&locale)?;
    let query = HubQuery::from_params(&params);

    let keeper = lock_keeper(&catalog)?;
    let catalog = keeper.catalog();

    let listing = list::query(catalog, &query, locale);
    let item_count = listing.rest.len() + usize::from(listing.featured.is_some());

    let headers = assign_headers(item_count);

    Ok((headers, Json(present::page(&listing, &catalog.site, locale))))
}
