//! Card Component

use leptos::prelude::*;

/// Rounded panel wrapping its children
#[component]
pub fn Card(
    /// Extra CSS classes appended to `card`
    #[prop(optional, into)]
    class_name: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class_name)>
            {children()}
        </div>
    }
}
