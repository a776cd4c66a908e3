use minijinja::{context, Environment};

use crate::Result;

/// Render the label/value metadata pairs as the markup for the `ting-details`
/// slot.
pub fn render(templates: &Environment<'_>, details: &[(String, String)]) -> Result<String> {
    let html = templates
        .get_template("components/record_details.html")?
        .render(context! {
            details => details,
        })?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::CliConfig, state::GlobalAppState};
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    #[test]
    fn definition_list_keeps_pair_order() {
        let templates = GlobalAppState::new(&CliConfig::default()).unwrap().templates;
        let details = vec![
            ("Publisher".to_string(), "Gyldendal".to_string()),
            ("Extent".to_string(), "3 volumes".to_string()),
        ];
        let markup = render(&templates, &details).unwrap();
        let fragment = Html::parse_fragment(&markup);

        let dt_selector = Selector::parse("dt").unwrap();
        let labels: Vec<_> = fragment
            .select(&dt_selector)
            .map(|e| e.text().collect::<String>())
            .collect();
        assert_eq!(vec!["Publisher", "Extent"], labels);

        let dd_selector = Selector::parse("dd").unwrap();
        let values: Vec<_> = fragment
            .select(&dd_selector)
            .map(|e| e.text().collect::<String>())
            .collect();
        assert_eq!(vec!["Gyldendal", "3 volumes"], values);
    }
}
