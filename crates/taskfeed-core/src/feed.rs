//! Paginated Feed
//!
//! Accumulates pages of posts fetched one at a time, and filters the
//! accumulated posts by a search query on the client.
//!
//! Fetching is split into `begin_*` (hands out a [`PageTicket`]) and
//! [`PaginatedFeed::complete`] so the caller can await the request without
//! holding the feed. Only one ticket is outstanding at a time, which keeps
//! pages applied in order.

use crate::error::{FeedError, FeedResult};
use crate::post::{Post, PostSource};

/// Posts requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Where the feed is in its fetch cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    /// Fetching page 1
    Loading,
    /// Fetching a page after the first
    LoadingMore { page: u32 },
    Loaded,
    /// The last fetch failed; accumulated posts are kept
    Failed(FeedError),
}

/// Permission to fetch one page. Returned to [`PaginatedFeed::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    page: u32,
    limit: u32,
}

impl PageTicket {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// How a fetch failure should be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedErrorView {
    /// Nothing to show yet: the error replaces the content
    Blocking(String),
    /// Earlier pages stay visible under a banner
    Banner(String),
}

#[derive(Debug, Clone)]
pub struct PaginatedFeed {
    posts: Vec<Post>,
    page_size: u32,
    /// Last page that loaded successfully, 0 before the first
    current_page: u32,
    in_flight: Option<PageTicket>,
    status: FeedStatus,
    query: String,
    exhausted: bool,
}

impl Default for PaginatedFeed {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginatedFeed {
    pub fn new(page_size: u32) -> Self {
        Self {
            posts: Vec::new(),
            page_size: page_size.max(1),
            current_page: 0,
            in_flight: None,
            status: FeedStatus::Idle,
            query: String::new(),
            exhausted: false,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    /// Every accumulated post, ignoring the search query
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// A fetch is outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The last page came back short, so there is nothing more to load
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn error(&self) -> Option<&FeedError> {
        match &self.status {
            FeedStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// First page in flight with nothing to show yet
    pub fn is_initial_loading(&self) -> bool {
        self.status == FeedStatus::Loading && self.posts.is_empty()
    }

    pub fn is_loading_more(&self) -> bool {
        matches!(self.status, FeedStatus::LoadingMore { .. })
    }

    pub fn error_view(&self) -> Option<FeedErrorView> {
        let message = self.error()?.to_string();
        Some(if self.posts.is_empty() {
            FeedErrorView::Blocking(message)
        } else {
            FeedErrorView::Banner(message)
        })
    }

    // ========================
    // Fetch cycle
    // ========================

    /// Start fetching `page`. `None` while another fetch is outstanding.
    pub fn begin_fetch(&mut self, page: u32) -> Option<PageTicket> {
        if let Some(pending) = self.in_flight {
            log::debug!("[FEED] Page {} requested while page {} is loading", page, pending.page);
            return None;
        }
        let ticket = PageTicket {
            page: page.max(1),
            limit: self.page_size,
        };
        self.status = if ticket.page == 1 {
            FeedStatus::Loading
        } else {
            FeedStatus::LoadingMore { page: ticket.page }
        };
        self.in_flight = Some(ticket);
        log::debug!("[FEED] Fetching page {}", ticket.page);
        Some(ticket)
    }

    /// Load from page 1, replacing what has accumulated once it succeeds
    pub fn start(&mut self) -> Option<PageTicket> {
        self.begin_fetch(1)
    }

    /// Explicit retry after a failure: restarts from page 1
    pub fn retry(&mut self) -> Option<PageTicket> {
        self.start()
    }

    /// Whether "load more" is currently offered
    pub fn can_load_more(&self) -> bool {
        !self.is_busy() && !self.is_searching() && !self.exhausted
    }

    /// Fetch the page after the last one that loaded
    pub fn load_more(&mut self) -> Option<PageTicket> {
        if !self.can_load_more() {
            return None;
        }
        self.begin_fetch(self.current_page + 1)
    }

    /// Apply the outcome of a ticket's fetch. Returns whether it was applied;
    /// a ticket that is not the outstanding one is dropped.
    pub fn complete(&mut self, ticket: PageTicket, result: FeedResult<Vec<Post>>) -> bool {
        if self.in_flight != Some(ticket) {
            log::warn!("[FEED] Dropping stale result for page {}", ticket.page);
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                log::debug!("[FEED] Page {} loaded {} posts", ticket.page, page.len());
                self.exhausted = page.len() < ticket.limit as usize;
                if ticket.page == 1 {
                    self.posts = page;
                } else {
                    self.posts.extend(page);
                }
                self.current_page = ticket.page;
                self.status = FeedStatus::Loaded;
            }
            Err(e) => {
                log::warn!("[FEED] Page {} failed: {:?}", ticket.page, e);
                self.status = FeedStatus::Failed(e);
            }
        }
        true
    }

    /// Await `ticket`'s page from `source` and apply it
    pub async fn run<P>(&mut self, ticket: Option<PageTicket>, source: &P) -> bool
    where
        P: PostSource + ?Sized,
    {
        let Some(ticket) = ticket else {
            return false;
        };
        let result = source.fetch_page(ticket.page, ticket.limit).await;
        self.complete(ticket, result)
    }

    pub async fn load_first<P: PostSource + ?Sized>(&mut self, source: &P) -> bool {
        let ticket = self.start();
        self.run(ticket, source).await
    }

    pub async fn load_more_from<P: PostSource + ?Sized>(&mut self, source: &P) -> bool {
        let ticket = self.load_more();
        self.run(ticket, source).await
    }

    pub async fn retry_from<P: PostSource + ?Sized>(&mut self, source: &P) -> bool {
        let ticket = self.retry();
        self.run(ticket, source).await
    }

    // ========================
    // Search
    // ========================

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set the search query. Pagination state is left alone.
    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Accumulated posts matching the query, all of them when it is blank
    pub fn visible(&self) -> Vec<Post> {
        if !self.is_searching() {
            return self.posts.clone();
        }
        let needle = self.query.to_lowercase();
        self.posts
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn match_count(&self) -> usize {
        if !self.is_searching() {
            return self.posts.len();
        }
        let needle = self.query.to_lowercase();
        self.posts.iter().filter(|p| p.matches(&needle)).count()
    }

    /// "Found N posts" while searching
    pub fn found_label(&self) -> Option<String> {
        if !self.is_searching() {
            return None;
        }
        let count = self.match_count();
        Some(format!("Found {} post{}", count, if count == 1 { "" } else { "s" }))
    }

    /// Empty-state text while searching with nothing matching
    pub fn no_match_message(&self) -> Option<String> {
        if !self.is_searching() || self.match_count() > 0 {
            return None;
        }
        Some(format!("No posts found matching \"{}\"", self.query.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Deterministic source: `total` posts split into pages, some pages failing.
    struct StubSource {
        total: u64,
        failing: RefCell<Vec<u32>>,
        calls: RefCell<Vec<u32>>,
    }

    impl StubSource {
        fn new(total: u64) -> Self {
            Self {
                total,
                failing: RefCell::new(Vec::new()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn fail_page(&self, page: u32) {
            self.failing.borrow_mut().push(page);
        }

        fn heal(&self) {
            self.failing.borrow_mut().clear();
        }
    }

    #[async_trait(?Send)]
    impl PostSource for StubSource {
        async fn fetch_page(&self, page: u32, limit: u32) -> FeedResult<Vec<Post>> {
            self.calls.borrow_mut().push(page);
            if self.failing.borrow().contains(&page) {
                return Err(FeedError::Status(500));
            }
            let first = u64::from(page - 1) * u64::from(limit) + 1;
            let last = (first + u64::from(limit) - 1).min(self.total);
            Ok((first..=last).map(post).collect())
        }
    }

    fn post(id: u64) -> Post {
        Post {
            id,
            user_id: (id - 1) / 10 + 1,
            title: format!("post title {}", id),
            body: format!("body text number {}", id),
        }
    }

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_first_page_loads() {
        let source = StubSource::new(100);
        let mut feed = PaginatedFeed::default();
        assert_eq!(feed.status(), &FeedStatus::Idle);

        assert!(feed.load_first(&source).await);
        assert_eq!(feed.status(), &FeedStatus::Loaded);
        assert_eq!(feed.posts().len(), 10);
        assert_eq!(feed.current_page(), 1);
        assert!(feed.can_load_more());
    }

    #[tokio::test]
    async fn test_pages_accumulate_in_order() {
        let source = StubSource::new(100);
        let mut feed = PaginatedFeed::default();

        feed.load_first(&source).await;
        feed.load_more_from(&source).await;

        assert_eq!(feed.posts().len(), 20);
        assert_eq!(ids(feed.posts()), (1..=20).collect::<Vec<_>>());
        assert_eq!(feed.current_page(), 2);
        assert_eq!(*source.calls.borrow(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_page_one_replaces() {
        let source = StubSource::new(100);
        let mut feed = PaginatedFeed::default();

        feed.load_first(&source).await;
        feed.load_more_from(&source).await;
        feed.load_first(&source).await;

        assert_eq!(ids(feed.posts()), (1..=10).collect::<Vec<_>>());
        assert_eq!(feed.current_page(), 1);
    }

    #[tokio::test]
    async fn test_first_page_failure_blocks() {
        let source = StubSource::new(100);
        source.fail_page(1);
        let mut feed = PaginatedFeed::default();

        assert!(feed.load_first(&source).await);
        assert!(feed.posts().is_empty());
        assert!(feed.visible().is_empty());
        assert_eq!(
            feed.error_view(),
            Some(FeedErrorView::Blocking("Failed to fetch posts".to_string()))
        );
    }

    #[tokio::test]
    async fn test_later_page_failure_keeps_content() {
        let source = StubSource::new(100);
        source.fail_page(3);
        let mut feed = PaginatedFeed::default();

        feed.load_first(&source).await;
        feed.load_more_from(&source).await;
        feed.load_more_from(&source).await;

        assert_eq!(feed.visible().len(), 20);
        assert_eq!(
            feed.error_view(),
            Some(FeedErrorView::Banner("Failed to fetch posts".to_string()))
        );
        assert_eq!(feed.current_page(), 2);
    }

    #[tokio::test]
    async fn test_load_more_after_failure_refetches_failed_page() {
        let source = StubSource::new(100);
        source.fail_page(2);
        let mut feed = PaginatedFeed::default();

        feed.load_first(&source).await;
        feed.load_more_from(&source).await;
        source.heal();
        feed.load_more_from(&source).await;

        assert_eq!(feed.error_view(), None);
        assert_eq!(ids(feed.posts()), (1..=20).collect::<Vec<_>>());
        assert_eq!(*source.calls.borrow(), vec![1, 2, 2]);
    }

    #[tokio::test]
    async fn test_retry_recovers_from_blocking_error() {
        let source = StubSource::new(100);
        source.fail_page(1);
        let mut feed = PaginatedFeed::default();

        feed.load_first(&source).await;
        source.heal();
        assert!(feed.retry_from(&source).await);

        assert_eq!(feed.status(), &FeedStatus::Loaded);
        assert_eq!(feed.posts().len(), 10);
    }

    #[test]
    fn test_busy_guard_blocks_overlapping_fetches() {
        let mut feed = PaginatedFeed::default();

        let first = feed.start().unwrap();
        assert!(feed.is_initial_loading());
        assert_eq!(feed.start(), None);
        assert_eq!(feed.load_more(), None);

        assert!(feed.complete(first, Ok((1..=10).map(post).collect())));
        let second = feed.load_more().unwrap();
        assert_eq!(second.page(), 2);
        assert!(feed.is_loading_more());
        assert_eq!(feed.load_more(), None);
        assert_eq!(feed.retry(), None);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut feed = PaginatedFeed::default();
        let first = feed.start().unwrap();
        feed.complete(first, Ok((1..=10).map(post).collect()));

        // Completing the same ticket twice must not append again
        assert!(!feed.complete(first, Ok((1..=10).map(post).collect())));

        let forged = PageTicket { page: 3, limit: 10 };
        let _second = feed.load_more().unwrap();
        assert!(!feed.complete(forged, Ok((21..=30).map(post).collect())));
        assert_eq!(feed.posts().len(), 10);
        assert!(feed.is_busy());
    }

    #[tokio::test]
    async fn test_short_page_exhausts_feed() {
        let source = StubSource::new(15);
        let mut feed = PaginatedFeed::default();

        feed.load_first(&source).await;
        assert!(!feed.is_exhausted());
        feed.load_more_from(&source).await;

        assert_eq!(feed.posts().len(), 15);
        assert!(feed.is_exhausted());
        assert!(!feed.can_load_more());
        assert!(!feed.load_more_from(&source).await);
        assert_eq!(*source.calls.borrow(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_filters_and_clear_restores() {
        let source = StubSource::new(10);
        let mut feed = PaginatedFeed::new(10);
        feed.load_first(&source).await;

        feed.search("TITLE 7");
        let found = feed.visible();
        assert_eq!(ids(&found), vec![7]);
        assert_eq!(feed.found_label().as_deref(), Some("Found 1 post"));

        feed.search("");
        assert_eq!(feed.visible().len(), 10);
        assert_eq!(feed.found_label(), None);
    }

    #[tokio::test]
    async fn test_search_matches_body_over_all_pages() {
        let source = StubSource::new(100);
        let mut feed = PaginatedFeed::default();
        feed.load_first(&source).await;
        feed.load_more_from(&source).await;

        feed.search("number 1");
        // 1, 10..=19
        assert_eq!(feed.match_count(), 11);
        assert_eq!(feed.found_label().as_deref(), Some("Found 11 posts"));

        feed.clear_search();
        assert_eq!(feed.visible().len(), 20);
    }

    #[tokio::test]
    async fn test_search_suppresses_load_more_without_resetting_pages() {
        let source = StubSource::new(100);
        let mut feed = PaginatedFeed::default();
        feed.load_first(&source).await;
        feed.load_more_from(&source).await;

        feed.search("title");
        assert!(!feed.can_load_more());
        assert!(!feed.load_more_from(&source).await);
        assert_eq!(feed.current_page(), 2);

        feed.search("   ");
        assert!(feed.can_load_more());
        feed.load_more_from(&source).await;
        assert_eq!(ids(feed.posts()), (1..=30).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_blank_query_is_not_a_search() {
        let source = StubSource::new(100);
        let mut feed = PaginatedFeed::default();
        feed.load_first(&source).await;

        feed.search("  \t ");
        assert!(!feed.is_searching());
        assert_eq!(feed.visible().len(), 10);
        assert_eq!(feed.found_label(), None);
        assert_eq!(feed.no_match_message(), None);
        assert!(feed.can_load_more());
    }

    #[tokio::test]
    async fn test_no_match_message_uses_trimmed_query() {
        let source = StubSource::new(10);
        let mut feed = PaginatedFeed::new(10);
        feed.load_first(&source).await;

        feed.search("  zebra ");
        assert!(feed.visible().is_empty());
        assert_eq!(
            feed.no_match_message().as_deref(),
            Some("No posts found matching \"zebra\"")
        );

        feed.search("title");
        assert_eq!(feed.no_match_message(), None);
    }
}
