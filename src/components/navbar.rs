//! Navbar Component
//!
//! Brand, screen switcher and theme toggle.

use leptos::prelude::*;

use crate::context::AppContext;

/// Screens reachable from the navbar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Tasks,
    Posts,
}

impl Screen {
    const ALL: [Screen; 2] = [Screen::Tasks, Screen::Posts];

    fn label(self) -> &'static str {
        match self {
            Screen::Tasks => "Tasks",
            Screen::Posts => "Posts",
        }
    }
}

#[component]
pub fn Navbar(
    screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <button class="navbar-brand" on:click=move |_| set_screen.set(Screen::Tasks)>
                    "Task Manager"
                </button>
                <div class="navbar-links">
                    {Screen::ALL.into_iter().map(|target| view! {
                        <button
                            class=move || if screen.get() == target { "nav-link active" } else { "nav-link" }
                            on:click=move |_| set_screen.set(target)
                        >
                            {target.label()}
                        </button>
                    }).collect_view()}
                </div>
                <button class="btn btn-secondary theme-toggle" on:click=move |_| ctx.toggle_theme()>
                    {move || ctx.theme.get().toggle_label()}
                </button>
            </div>
        </nav>
    }
}
