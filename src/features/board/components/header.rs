use leptos::prelude::*;

use crate::features::board::hooks::BoardHook;

#[component]
pub fn BoardHeader(hook: BoardHook, #[prop(into)] on_add_column: Callback<()>) -> impl IntoView {
    let edit_mode = move || hook.layout.with(|layout| layout.edit_mode());

    view! {
        <header class="board-header">
            <h1>"Notes"</h1>
            <div class="board-actions">
                <button
                    id="add-column-button"
                    class="btn-secondary"
                    title="Add Column"
                    on:click=move |_| on_add_column.run(())
                >"+ Add Column"</button>
                <button
                    id="edit-mode-button"
                    class="btn-primary"
                    class:active=edit_mode
                    on:click=move |_| hook.toggle_edit_mode()
                >
                    {move || if edit_mode() { "Save Layout" } else { "Edit Layout" }}
                </button>
            </div>
        </header>
    }
}
