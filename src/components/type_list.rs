use minijinja::{context, Environment};

use crate::Result;

/// Render the material type labels as the markup for the `types` slot.
pub fn render(templates: &Environment<'_>, types: &[String]) -> Result<String> {
    let html = templates
        .get_template("components/type_list.html")?
        .render(context! {
            types => types,
        })?;
    Ok(html)
}
