use std::path::PathBuf;

use axum::extract::Request;
use axum::response::{IntoResponse, Redirect, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::errors::AppError;

/// Router fallback: static files from one directory, with an optional API
/// prefix that never falls through to disk and an optional page that `/`
/// redirects to when the tree has no index.
#[derive(Clone)]
pub struct FrontEnd {
    files: ServeDir,
    index: PathBuf,
    api_prefix: Option<&'static str>,
    landing_page: Option<&'static str>,
}

impl FrontEnd {
    pub fn new(dir: &str) -> Self {
        Self {
            files: ServeDir::new(dir),
            index: PathBuf::from(dir).join("index.html"),
            api_prefix: None,
            landing_page: None,
        }
    }

    pub fn with_api_prefix(mut self, prefix: &'static str) -> Self {
        self.api_prefix = Some(prefix);
        self
    }

    pub fn with_landing_page(mut self, page: &'static str) -> Self {
        self.landing_page = Some(page);
        self
    }

    pub async fn serve(self, req: Request) -> Response {
        let path = req.uri().path();
        let under_api = self.api_prefix.is_some_and(|prefix| path.starts_with(prefix));
        let is_root = path == "/";

        if under_api {
            return AppError::PathNotFound.into_response();
        }

        if is_root {
            if let Some(page) = self.landing_page {
                let has_index = tokio::fs::try_exists(&self.index).await.unwrap_or(false);
                if !has_index {
                    return Redirect::to(page).into_response();
                }
            }
        }

        self.files.oneshot(req).await.into_response()
    }
}
