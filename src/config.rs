use clap::Parser;
use std::{ffi::OsString, path::PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliConfig {
    /// Port to listen to.
    #[arg(long, short, default_value_t = 3000)]
    pub port: u16,
    /// Externally used URL for the start page of the frontend.
    #[arg(long, default_value = "http://127.0.0.1:3000/")]
    pub frontend_prefix: String,
    /// URL for the Ting search service used by the frontend.
    #[arg(
        long,
        env = "TING_SERVICE_URL",
        default_value = "http://127.0.0.1:8200/v1/"
    )]
    pub service_url: String,
    /// URL for the additional-information service that provides cover images.
    /// Cover lookup is skipped when unset.
    #[arg(long, env = "TING_ADDI_URL")]
    pub addi_url: Option<String>,
    /// If set, a JSON file mapping the user-facing source strings to their
    /// translations.
    #[arg(long)]
    pub translations: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let empty_arguments: Vec<OsString> = Vec::default();
        Parser::parse_from(empty_arguments)
    }
}
