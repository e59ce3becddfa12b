//! Task Row Component
//!
//! One task with its checkbox and delete button.

use leptos::prelude::*;
use taskfeed_core::Task;

use crate::components::Card;
use crate::context::AppContext;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let completed = task.completed;

    view! {
        <Card class_name="task-row">
            <label class="task-main">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| ctx.tasks.update(|store| {
                        store.toggle(id);
                    })
                />
                <span class=if completed { "task-text completed" } else { "task-text" }>
                    {task.text}
                </span>
            </label>
            <button
                class="btn btn-danger delete-btn"
                on:click=move |_| ctx.tasks.update(|store| {
                    store.remove(id);
                })
            >
                "Delete"
            </button>
        </Card>
    }
}
