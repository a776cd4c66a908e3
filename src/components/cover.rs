use minijinja::{context, Environment};

use crate::{client::addi::AdditionalInformation, Result};

/// Render the picture markup for a cover.
///
/// Returns `None` when there is no thumbnail, so the caller can leave out the
/// picture block entirely. Without a detail URL the image is emitted without a
/// link wrapper.
pub fn render(
    templates: &Environment<'_>,
    info: &AdditionalInformation,
) -> Result<Option<String>> {
    if info.thumbnail_url().is_empty() {
        return Ok(None);
    }
    let html = templates
        .get_template("components/cover.html")?
        .render(context! {
            thumbnail_url => info.thumbnail_url(),
            detail_url => info.detail_url(),
        })?;
    Ok(Some(html))
}
