use leptos::prelude::*;

use crate::features::board::hooks::BoardHook;

// Floating copy of the dragged column, pinned under the pointer
#[component]
pub fn DragGhost(hook: BoardHook) -> impl IntoView {
    let fallback_title = hook.config().default_column_title;
    let ghost = move || {
        hook.layout.with(|layout| {
            layout.ghost().map(|(column_id, at)| {
                let title = hook.board.with(|board| {
                    board
                        .column(column_id)
                        .map(|c| c.display_title(&fallback_title).to_string())
                        .unwrap_or_default()
                });
                (title, at)
            })
        })
    };

    move || {
        ghost().map(|(title, at)| {
            view! {
                <div
                    class="column ghost"
                    style:position="fixed"
                    style:pointer-events="none"
                    style:left=format!("{}px", at.x)
                    style:top=format!("{}px", at.y)
                >
                    <p>{title}</p>
                </div>
            }
        })
    }
}
