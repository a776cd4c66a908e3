use axum::http::StatusCode;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::{errors::AppError, state::GlobalAppState, Result};

const PATH_SEGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>');

/// Links to supplementary artwork for one record, as returned by the
/// additional-information service.
///
/// Both URLs are taken over verbatim and may be empty. Deciding what to do
/// with an empty URL is left to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdditionalInformation {
    thumbnail_url: String,
    detail_url: String,
}

impl AdditionalInformation {
    pub fn new<S: Into<String>>(thumbnail_url: S, detail_url: S) -> AdditionalInformation {
        AdditionalInformation {
            thumbnail_url: thumbnail_url.into(),
            detail_url: detail_url.into(),
        }
    }

    /// URL of the small preview image.
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    /// URL of the full-size or detail view.
    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }
}

/// Get the cover links for a record, if the additional-information service is
/// configured and knows the given ISBN.
pub async fn lookup(state: &GlobalAppState, isbn: &str) -> Result<Option<AdditionalInformation>> {
    let addi_url = match &state.addi_url {
        Some(addi_url) => addi_url,
        None => return Ok(None),
    };
    let url = addi_url.join(&format!(
        "covers/{}",
        utf8_percent_encode(isbn, PATH_SEGMENT)
    ))?;

    let client = state.client();
    let request = client.get(url.clone()).build()?;
    let response = client.execute(request).await?;
    match response.status() {
        StatusCode::OK => Ok(Some(response.json().await?)),
        StatusCode::NOT_FOUND => Ok(None),
        status_code => Err(AppError::Backend { status_code, url }),
    }
}
