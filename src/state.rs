use crate::{config::CliConfig, translate::Translator, Result, TEMPLATES_DIR};
use minijinja::value::Kwargs;
use std::sync::Arc;
use url::Url;

#[derive(Debug)]
pub struct GlobalAppState {
    pub service_url: Url,
    pub addi_url: Option<Url>,
    pub frontend_prefix: String,
    pub templates: minijinja::Environment<'static>,
    pub translator: Arc<Translator>,
    default_client: reqwest::Client,
}

impl GlobalAppState {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let translator = if let Some(catalog_file) = &config.translations {
            Translator::from_catalog_file(catalog_file)?
        } else {
            Translator::default()
        };
        let translator = Arc::new(translator);

        let mut templates = minijinja::Environment::new();

        // Define any global variables
        templates.add_global("url_prefix", config.frontend_prefix.to_string());

        // Load templates by name from the included templates folder
        templates.set_loader(|name| {
            if let Some(file) = TEMPLATES_DIR.get_file(name) {
                Ok(file.contents_utf8().map(|s| s.to_string()))
            } else {
                Ok(None)
            }
        });

        // Route every user-facing string through the translation collaborator.
        // Keyword arguments become the %name% substitution parameters.
        let translator_for_template = translator.clone();
        templates.add_function(
            "t",
            move |text: String,
                  kwargs: Kwargs|
                  -> std::result::Result<String, minijinja::Error> {
                let mut params: Vec<(String, String)> = Vec::new();
                for name in kwargs.args() {
                    let value: String = kwargs.get(name)?;
                    params.push((name.to_string(), value));
                }
                kwargs.assert_all_used()?;
                let params: Vec<(&str, &str)> = params
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str()))
                    .collect();
                Ok(translator_for_template.translate(&text, &params))
            },
        );

        let service_url = if config.service_url.is_empty() {
            Url::parse("http://127.0.0.1:8200/v1/")?
        } else {
            Url::parse(&config.service_url)?
        };
        let addi_url = config.addi_url.as_deref().map(Url::parse).transpose()?;
        let default_client = reqwest::ClientBuilder::new().build()?;

        let result = Self {
            service_url,
            addi_url,
            frontend_prefix: config.frontend_prefix.clone(),
            templates,
            translator,
            default_client,
        };
        Ok(result)
    }

    pub fn client(&self) -> reqwest::Client {
        self.default_client.clone()
    }
}
