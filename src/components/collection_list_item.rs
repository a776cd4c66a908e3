use minijinja::{context, Environment};
use serde::Serialize;

use crate::Result;

/// Fully resolved view-model for one collection entry in the search result
/// list.
///
/// The `picture`, `type_list` and `details` fields carry trusted, already
/// rendered markup and are inserted verbatim. All other fields are plain text
/// and get escaped by the template engine, so the two kinds must never be
/// mixed up by a caller.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CollectionListItem {
    pub picture: Option<String>,
    pub type_list: String,
    pub language: Option<String>,
    pub title: String,
    pub url: String,
    pub creators: Vec<String>,
    pub publication_date: Option<String>,
    pub title_full: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub details: String,
}

/// Render the `<li>` fragment for one collection.
///
/// Optional fields that are unset suppress their whole block, the remaining
/// blocks keep a fixed order.
pub fn render(templates: &Environment<'_>, item: &CollectionListItem) -> Result<String> {
    let html = templates
        .get_template("components/collection_list_item.html")?
        .render(context! {
            item => item,
        })?;
    Ok(html)
}
