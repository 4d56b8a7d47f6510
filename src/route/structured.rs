use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{catalog::keeper, list, present, query::HubQuery};

use super::{lock_keeper, parse_locale};

pub async fn get(
    State(catalog): State<keeper::ArcMutex>,
    Path(locale): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<present::BlogJsonLd>, StatusCode> {
    let locale = parse_locale(&locale)?;
    let query = HubQuery::from_params(&params);

    let keeper = lock_keeper(&catalog)?;
    let catalog = keeper.catalog();

    // The cap applies to the filtered+sorted list, before the hero split.
    let mut items = list::filter(catalog.items(), &query, locale);
    list::sort(&mut items, query.sort, locale);

    Ok(Json(present::blog_json_ld(&items, &catalog.site, locale)))
}
