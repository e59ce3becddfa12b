//! Posts List Component
//!
//! Searchable grid of posts with "load more" pagination. Shows a spinner
//! or a blocking error until the first page arrives.

use leptos::prelude::*;
use taskfeed_core::FeedErrorView;

use crate::components::{Card, PostCard};
use crate::context::AppContext;

/// What the page body shows
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Loading,
    Blocked(String),
    Ready,
}

#[component]
pub fn PostsList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let feed = ctx.feed;

    // Load first page on mount
    Effect::new(move |_| ctx.start_feed());

    let phase = Memo::new(move |_| {
        feed.with(|f| {
            if f.is_initial_loading() {
                Phase::Loading
            } else if let Some(FeedErrorView::Blocking(message)) = f.error_view() {
                Phase::Blocked(message)
            } else {
                Phase::Ready
            }
        })
    });

    view! {
        <div class="posts-page">
            <h1 class="page-title">"Posts from JSONPlaceholder"</h1>
            {move || match phase.get() {
                Phase::Loading => view! {
                    <Card>
                        <div class="loading">
                            <div class="spinner"></div>
                            <span>"Loading posts..."</span>
                        </div>
                    </Card>
                }.into_any(),
                Phase::Blocked(message) => view! {
                    <Card>
                        <div class="error-state">
                            <p class="error-text">"Error: " {message}</p>
                            <button class="btn btn-primary" on:click=move |_| ctx.retry()>
                                "Try Again"
                            </button>
                        </div>
                    </Card>
                }.into_any(),
                Phase::Ready => view! { <FeedContent /> }.into_any(),
            }}
        </div>
    }
}

/// Search bar, error banner, post grid and the load-more control
#[component]
fn FeedContent() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let feed = ctx.feed;

    let query = Memo::new(move |_| feed.with(|f| f.query().to_string()));
    let visible = Memo::new(move |_| feed.with(|f| f.visible()));
    let found = Memo::new(move |_| feed.with(|f| f.found_label()));
    let banner = Memo::new(move |_| match feed.with(|f| f.error_view()) {
        Some(FeedErrorView::Banner(message)) => Some(message),
        _ => None,
    });
    let searching = Memo::new(move |_| feed.with(|f| f.is_searching()));
    let no_match = Memo::new(move |_| feed.with(|f| f.no_match_message()));
    let loading_more = Memo::new(move |_| feed.with(|f| f.is_loading_more()));
    let exhausted = Memo::new(move |_| feed.with(|f| f.is_exhausted()));

    view! {
        <Card class_name="search">
            <div class="search-row">
                <input
                    type="text"
                    placeholder="Search posts by title or content..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        feed.update(|f| f.search(value));
                    }
                />
                <Show when=move || searching.get()>
                    <button class="btn btn-secondary" on:click=move |_| feed.update(|f| f.clear_search())>
                        "Clear"
                    </button>
                </Show>
            </div>
            {move || found.get().map(|label| view! { <p class="search-count">{label}</p> })}
        </Card>

        {move || banner.get().map(|message| view! {
            <Card class_name="error-banner">
                <p class="error-text">"Error loading more posts: " {message}</p>
            </Card>
        })}

        <Show
            when=move || no_match.with(|m| m.is_none())
            fallback=move || view! {
                <Card>
                    <p class="empty-state">{move || no_match.get().unwrap_or_default()}</p>
                </Card>
            }
        >
            <div class="post-grid">
                <For
                    each=move || visible.get()
                    key=|post| post.id
                    children=move |post| view! { <PostCard post=post /> }
                />
            </div>
        </Show>

        <Show when=move || !searching.get() && !exhausted.get()>
            <div class="load-more">
                <Show
                    when=move || loading_more.get()
                    fallback=move || view! {
                        <button class="btn btn-primary" on:click=move |_| ctx.load_more()>
                            "Load More Posts"
                        </button>
                    }
                >
                    <div class="loading">
                        <div class="spinner small"></div>
                        <span>"Loading more posts..."</span>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
