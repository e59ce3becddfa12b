//! Remote Posts
//!
//! The read-only post record and the port used to fetch pages of them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FeedResult;

/// A post returned by the remote collection (`{id, userId, title, body}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Case-insensitive substring match over title or body.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}

/// A paginated remote collection of posts.
///
/// Futures are not `Send`: browser fetches run on the single UI thread.
#[async_trait(?Send)]
pub trait PostSource {
    /// Fetch one page (1-based) of at most `limit` posts
    async fn fetch_page(&self, page: u32, limit: u32) -> FeedResult<Vec<Post>>;
}

/// `GET <base>/posts?_limit=<limit>&_page=<page>`
pub fn posts_url(base: &str, page: u32, limit: u32) -> String {
    format!(
        "{}/posts?_limit={}&_page={}",
        base.trim_end_matches('/'),
        limit,
        page
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_url() {
        assert_eq!(
            posts_url("https://jsonplaceholder.typicode.com", 2, 10),
            "https://jsonplaceholder.typicode.com/posts?_limit=10&_page=2"
        );
        assert_eq!(
            posts_url("http://localhost:3000/", 1, 5),
            "http://localhost:3000/posts?_limit=5&_page=1"
        );
    }

    #[test]
    fn test_decodes_wire_format() {
        let raw = r#"[{"userId":1,"id":3,"title":"ea molestias","body":"et iusto sed"}]"#;
        let posts: Vec<Post> = serde_json::from_str(raw).unwrap();
        assert_eq!(posts[0].id, 3);
        assert_eq!(posts[0].user_id, 1);
    }

    #[test]
    fn test_matches_title_or_body() {
        let post = Post {
            id: 1,
            user_id: 1,
            title: "Sunt Aut Facere".to_string(),
            body: "quia et suscipit".to_string(),
        };
        assert!(post.matches("facere"));
        assert!(post.matches("suscipit"));
        assert!(!post.matches("dolor"));
    }
}
