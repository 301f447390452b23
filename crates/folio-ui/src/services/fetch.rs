//! Same-origin JSON fetches through `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use crate::core::error::SourceError;
use crate::core::ports::ContentSource;

/// Content source issuing `GET` requests relative to the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

#[async_trait(?Send)]
impl ContentSource for HttpSource {
    async fn fetch_json(&self, path: &str) -> Result<Value, SourceError> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|err| SourceError::Transport {
                path: path.to_string(),
                detail: err.to_string(),
            })?;
        if !response.ok() {
            return Err(SourceError::Unavailable {
                path: path.to_string(),
                status: response.status(),
            });
        }
        let body = response.text().await.map_err(|err| SourceError::Transport {
            path: path.to_string(),
            detail: err.to_string(),
        })?;
        serde_json::from_str(&body).map_err(|source| SourceError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
