use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use crate::Result;

/// Lookup-and-substitute localization for the user-facing strings.
///
/// The English source strings double as catalog keys. A string that is missing
/// from the catalog is returned unchanged, so the default translator is the
/// identity and a broken catalog can never take the frontend down.
#[derive(Debug, Default, Clone)]
pub struct Translator {
    catalog: HashMap<String, String>,
}

impl Translator {
    pub fn from_catalog(catalog: HashMap<String, String>) -> Translator {
        Translator { catalog }
    }

    /// Load a catalog from a JSON file mapping source strings to translations.
    pub fn from_catalog_file(path: &Path) -> Result<Translator> {
        let file = File::open(path)?;
        let catalog = serde_json::from_reader(BufReader::new(file))?;
        Ok(Translator { catalog })
    }

    /// Get the translation for a source string, falling back to the input.
    pub fn lookup<'a>(&'a self, text: &'a str) -> &'a str {
        self.catalog.get(text).map(|s| s.as_str()).unwrap_or(text)
    }

    /// Translate a template string and replace its `%name%` placeholders with
    /// the given parameter values.
    pub fn translate(&self, text: &str, params: &[(&str, &str)]) -> String {
        let mut result = self.lookup(text).to_string();
        for (name, value) in params {
            result = result.replace(&format!("%{}%", name), value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identity_without_catalog() {
        let t = Translator::default();
        assert_eq!("Additional title information:", t.lookup("Additional title information:"));
        assert_eq!(
            "By Jane Doe",
            t.translate("By %creator_name%", &[("creator_name", "Jane Doe")])
        );
    }

    #[test]
    fn catalog_lookup_applies_before_substitution() {
        let mut catalog = HashMap::new();
        catalog.insert("By %creator_name%".to_string(), "Af %creator_name%".to_string());
        let t = Translator::from_catalog(catalog);
        assert_eq!(
            "Af Jane Doe",
            t.translate("By %creator_name%", &[("creator_name", "Jane Doe")])
        );
    }

    #[test]
    fn missing_string_falls_back_to_input() {
        let mut catalog = HashMap::new();
        catalog.insert("something else".to_string(), "andet".to_string());
        let t = Translator::from_catalog(catalog);
        assert_eq!(
            "(2001)",
            t.translate("(%publication_date%)", &[("publication_date", "2001")])
        );
    }

    #[test]
    fn unknown_placeholder_is_left_alone() {
        let t = Translator::default();
        assert_eq!(
            "By %creator_name%",
            t.translate("By %creator_name%", &[("publication_date", "2001")])
        );
    }
}
