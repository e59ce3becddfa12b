//! Task & Feed Core
//!
//! Browser-independent state for the app:
//! - persistent: a list mirrored to one storage slot
//! - task_store: the to-do list built on it
//! - feed: paginated, searchable posts from a remote source
//! - theme: the remembered light/dark preference

mod config;
mod error;
mod feed;
mod persistent;
mod post;
mod storage;
mod task;
mod task_store;
mod theme;

pub use config::{AppConfig, CONFIG_KEY, DEFAULT_API_BASE_URL};
pub use error::{FeedError, FeedResult, StorageError, StorageResult, FETCH_FAILED_MESSAGE};
pub use feed::{FeedErrorView, FeedStatus, PageTicket, PaginatedFeed, DEFAULT_PAGE_SIZE};
pub use persistent::PersistentList;
pub use post::{posts_url, Post, PostSource};
pub use storage::{KeyValueStore, MemoryStore};
pub use task::{Task, TaskCounts, TaskFilter, TaskId};
pub use task_store::{Clock, SystemClock, TaskStore, TASKS_KEY};
pub use theme::{Theme, THEME_KEY};
