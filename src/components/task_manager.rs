//! Task Manager Component
//!
//! Add form, filter bar and the filtered task list.

use leptos::prelude::*;
use taskfeed_core::TaskFilter;

use crate::components::{Card, TaskRow};
use crate::context::AppContext;

#[component]
pub fn TaskManager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let tasks = ctx.tasks;

    let (draft, set_draft) = signal(String::new());
    let (filter, set_filter) = signal(TaskFilter::All);

    let counts = Memo::new(move |_| tasks.with(|store| store.counts()));
    let shown = Memo::new(move |_| tasks.with(|store| store.filter(filter.get())));

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if tasks.try_update(|store| store.add(&text)).flatten().is_some() {
            set_draft.set(String::new());
        }
    };

    view! {
        <div class="task-manager">
            <h1 class="page-title">"Task Manager"</h1>

            <Card class_name="add-task">
                <form class="add-task-form" on:submit=add_task>
                    <input
                        type="text"
                        placeholder="Add a new task..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Add Task"</button>
                </form>
            </Card>

            <div class="filter-bar">
                {TaskFilter::ALL.into_iter().map(|mode| view! {
                    <button
                        class=move || if filter.get() == mode { "btn btn-primary" } else { "btn btn-secondary" }
                        on:click=move |_| set_filter.set(mode)
                    >
                        {move || format!("{} ({})", mode.label(), mode.count(&counts.get()))}
                    </button>
                }).collect_view()}
                <Show when=move || counts.with(|c| c.completed > 0)>
                    <button
                        class="btn btn-danger"
                        on:click=move |_| tasks.update(|store| {
                            store.clear_completed();
                        })
                    >
                        "Clear completed"
                    </button>
                </Show>
            </div>

            <div class="task-list">
                <Show
                    when=move || !shown.with(|list| list.is_empty())
                    fallback=move || view! {
                        <Card>
                            <p class="empty-state">{move || filter.get().empty_message()}</p>
                        </Card>
                    }
                >
                    <For
                        each=move || shown.get()
                        key=|task| (task.id, task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </Show>
            </div>
        </div>
    }
}
