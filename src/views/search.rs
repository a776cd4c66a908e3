use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use minijinja::context;
use serde::Deserialize;

use crate::{
    client::{addi, search},
    components::{collection_list_item, cover, record_details, type_list},
    state::GlobalAppState,
    Result,
};

pub fn create_routes() -> Result<Router<Arc<GlobalAppState>>> {
    let result = Router::new().route("/", get(show));
    Ok(result)
}

#[derive(Deserialize, Debug)]
struct Params {
    query: Option<String>,
}

#[tracing::instrument]
async fn show(
    State(state): State<Arc<GlobalAppState>>,
    Query(params): Query<Params>,
) -> Result<impl IntoResponse> {
    let query = params.query.unwrap_or_default();

    let mut items: Vec<String> = Vec::new();
    if !query.is_empty() {
        let records = search::collections(state.as_ref(), &query).await?;
        for record in records {
            let item = resolve_list_item(state.as_ref(), record).await?;
            items.push(collection_list_item::render(&state.templates, &item)?);
        }
    }

    let html = state
        .templates
        .get_template("search.html")?
        .render(context! {
            query => query,
            items => items,
        })?;

    Ok((StatusCode::OK, Html(html)))
}

/// Build the fully resolved view-model for one search hit.
async fn resolve_list_item(
    state: &GlobalAppState,
    record: search::CollectionRecord,
) -> Result<collection_list_item::CollectionListItem> {
    let picture = if let Some(isbn) = &record.isbn {
        match addi::lookup(state, isbn).await {
            Ok(Some(info)) => cover::render(&state.templates, &info)?,
            Ok(None) => None,
            Err(e) => {
                // A failing cover service must never break the result list
                tracing::warn!("Could not get cover for ISBN {}: {}", isbn, e);
                None
            }
        }
    } else {
        None
    };

    Ok(collection_list_item::CollectionListItem {
        picture,
        type_list: type_list::render(&state.templates, &record.types)?,
        language: record.language,
        title: record.title,
        url: record.url,
        creators: record.creators,
        publication_date: record.publication_date,
        title_full: record.title_full,
        abstract_text: record.abstract_text,
        details: record_details::render(&state.templates, &record.details)?,
    })
}
