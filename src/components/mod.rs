//! UI Components
//!
//! Reusable Leptos components.

mod card;
mod navbar;
mod post_card;
mod posts_list;
mod task_manager;
mod task_row;

pub use card::Card;
pub use navbar::{Navbar, Screen};
pub use post_card::PostCard;
pub use posts_list::PostsList;
pub use task_manager::TaskManager;
pub use task_row::TaskRow;
