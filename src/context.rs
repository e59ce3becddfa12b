//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskfeed_core::{AppConfig, FeedStatus, PageTicket, PaginatedFeed, PostSource, TaskStore, Theme};

use crate::platform::{BrowserStorage, HttpPostSource};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task list, written through to localStorage
    pub tasks: RwSignal<TaskStore<BrowserStorage>>,
    /// Accumulated posts and fetch state
    pub feed: RwSignal<PaginatedFeed>,
    /// Current color theme
    pub theme: RwSignal<Theme>,
    source: StoredValue<HttpPostSource>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            tasks: RwSignal::new(TaskStore::new(BrowserStorage, config.tasks_key.clone())),
            feed: RwSignal::new(PaginatedFeed::new(config.page_size)),
            theme: RwSignal::new(Theme::load(&BrowserStorage)),
            source: StoredValue::new(HttpPostSource::new(config.api_base_url.clone())),
        }
    }

    /// Load page 1 unless the feed has already started
    pub fn start_feed(&self) {
        self.fetch(|feed| {
            if *feed.status() == FeedStatus::Idle {
                feed.start()
            } else {
                None
            }
        });
    }

    pub fn load_more(&self) {
        self.fetch(PaginatedFeed::load_more);
    }

    pub fn retry(&self) {
        self.fetch(PaginatedFeed::retry);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        next.save(&BrowserStorage);
        self.theme.set(next);
    }

    /// Take a ticket from the feed, fetch it, hand the result back
    fn fetch(&self, begin: impl FnOnce(&mut PaginatedFeed) -> Option<PageTicket>) {
        let feed = self.feed;
        let Some(ticket) = feed.try_update(begin).flatten() else {
            return;
        };
        let source = self.source.get_value();
        spawn_local(async move {
            let result = source.fetch_page(ticket.page(), ticket.limit()).await;
            feed.update(|f| {
                f.complete(ticket, result);
            });
        });
    }
}
