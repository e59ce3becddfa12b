//! TaskFeed App
//!
//! Top-level layout: navbar plus the selected screen.

use leptos::prelude::*;
use taskfeed_core::AppConfig;

use crate::components::{Navbar, PostsList, Screen, TaskManager};
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    let (screen, set_screen) = signal(Screen::Tasks);

    // Mirror the theme onto <html class="dark">
    Effect::new(move |_| {
        let dark = ctx.theme.get().is_dark();
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
                log::debug!("[APP] theme class not applied: {:?}", e);
            }
        }
    });

    view! {
        <div class="app-layout">
            <Navbar screen=screen set_screen=set_screen />
            <main class="main-content">
                {move || match screen.get() {
                    Screen::Tasks => view! { <TaskManager /> }.into_any(),
                    Screen::Posts => view! { <PostsList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
