use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use minijinja::context;
use thiserror::Error;
use url::Url;

use crate::TEMPLATES_DIR;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    #[error(transparent)]
    Axum(#[from] axum::http::Error),
    #[error(transparent)]
    Minijinja(#[from] minijinja::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    UrlParsing(#[from] url::ParseError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Service at {url} returned status code {status_code}")]
    Backend { status_code: StatusCode, url: Url },
}

fn render_error_page(
    status: StatusCode,
    message: &str,
) -> std::result::Result<String, minijinja::Error> {
    // The application state is not reachable from here, so the error page gets
    // its own environment over the same embedded templates.
    let mut templates = minijinja::Environment::new();
    templates.add_global("url_prefix", "/");
    templates.set_loader(|name| {
        if let Some(file) = TEMPLATES_DIR.get_file(name) {
            Ok(file.contents_utf8().map(|s| s.to_string()))
        } else {
            Ok(None)
        }
    });
    templates.get_template("error.html")?.render(context! {
        status_code => status.to_string(),
        message => message,
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::trace!("{}", &self);
        let (status, message) = match self {
            AppError::Reqwest(e) => (StatusCode::BAD_GATEWAY, format!("{}", e)),
            AppError::Backend { status_code, url } => (
                StatusCode::BAD_GATEWAY,
                format!("Service at {} returned status code {}", url, status_code),
            ),
            AppError::UrlParsing(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Url could not be parsed: {}", e),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", &self)),
        };
        let html = render_error_page(status, &message)
            .unwrap_or_else(|e| format!("Error page template did not compile: {}", e));
        (status, Html(html)).into_response()
    }
}
