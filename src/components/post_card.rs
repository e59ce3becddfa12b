//! Post Card Component

use leptos::prelude::*;
use taskfeed_core::Post;

use crate::components::Card;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    view! {
        <Card class_name="post-card">
            <h3 class="post-title">{post.title}</h3>
            <p class="post-body">{post.body}</p>
            <div class="post-meta">
                <span>"Post ID: " {post.id}</span>
                <span>"User ID: " {post.user_id}</span>
            </div>
        </Card>
    }
}
