//! Posts API Binding
//!
//! Fetches pages of posts over HTTP with `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;
use taskfeed_core::{posts_url, FeedError, FeedResult, Post, PostSource};

/// `PostSource` backed by a JSONPlaceholder-style REST endpoint
#[derive(Debug, Clone)]
pub struct HttpPostSource {
    base_url: String,
}

impl HttpPostSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl PostSource for HttpPostSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> FeedResult<Vec<Post>> {
        let url = posts_url(&self.base_url, page, limit);
        log::debug!("[API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FeedError::Status(response.status()));
        }

        response
            .json::<Vec<Post>>()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))
    }
}
