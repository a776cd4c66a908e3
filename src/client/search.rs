use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::{errors::AppError, state::GlobalAppState, Result};

const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&');

/// One collection (e.g. a multi-volume book set grouped as a single hit) as
/// returned by the search service. All display strings arrive fully resolved,
/// the frontend only turns them into markup.
#[derive(Deserialize, Debug, Clone)]
pub struct CollectionRecord {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub creators: Vec<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub title_full: Option<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub details: Vec<(String, String)>,
    #[serde(default)]
    pub isbn: Option<String>,
}

/// Find all collections matching the given query
pub async fn collections(state: &GlobalAppState, query: &str) -> Result<Vec<CollectionRecord>> {
    let url = state.service_url.join(&format!(
        "search?query={}",
        utf8_percent_encode(query, QUERY)
    ))?;

    let client = state.client();
    let request = client.get(url).build()?;
    let response = client.execute(request).await?;
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(AppError::Backend {
            status_code: response.status(),
            url: response.url().clone(),
        })
    }
}
