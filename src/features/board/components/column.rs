use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::models::{generate_button_id, ColumnId};
use crate::features::board::hooks::BoardHook;
use crate::features::board::services::{element_rect, pointer};

#[component]
pub fn BoardColumn(
    #[prop(into)] column_id: ColumnId,
    hook: BoardHook,
    #[prop(into)] on_add_note: Callback<ColumnId>,
) -> impl IntoView {
    let fallback_title = hook.config().default_column_title;
    let column = {
        let column_id = column_id.clone();
        Memo::new(move |_| hook.board.with(|board| board.column(&column_id).cloned()))
    };
    let add_button_id = generate_button_id();

    let is_dragging = {
        let column_id = column_id.clone();
        move || hook.layout.with(|layout| layout.is_dragging(&column_id))
    };
    let is_resizing = {
        let column_id = column_id.clone();
        move || hook.layout.with(|layout| layout.is_resizing(&column_id))
    };

    let start_interaction = {
        let column_id = column_id.clone();
        move |ev: web_sys::MouseEvent| {
            let Some(element) = ev
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            hook.pointer_down(column_id.clone(), pointer(&ev), element_rect(&element));
        }
    };

    let delete_column = {
        let column_id = column_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if web_sys::window()
                .map(|w| w.confirm_with_message("Are you sure you want to delete this column?").unwrap_or(false))
                .unwrap_or(false)
            {
                hook.delete_column(column_id.clone());
            }
        }
    };

    let open_note_modal = {
        let column_id = column_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            on_add_note.run(column_id.clone());
        }
    };

    view! {
        <div
            class="column"
            class:dragging=is_dragging
            class:resizing=is_resizing
            data-column-id=column_id.to_string()
            data-order=move || column.with(|c| c.as_ref().and_then(|c| c.order).map(|o| o.to_string()))
            style:grid-column=move || column.with(|c| c.as_ref().map(|c| c.grid_column()).unwrap_or_default())
            on:mousedown=start_interaction
        >
            <ul>
                <li>
                    <div>
                        <div class="note-content">
                            <p>
                                {move || column.with(|c| {
                                    c.as_ref()
                                        .map(|c| c.display_title(&fallback_title).to_string())
                                        .unwrap_or_default()
                                })}
                            </p>
                        </div>
                        <button class="delete" title="Delete Column" on:mousedown=|ev| ev.stop_propagation() on:click=delete_column>"×"</button>
                    </div>
                </li>
                {move || column.with(|c| {
                    c.as_ref()
                        .map(|c| c.notes.clone())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|note| view! {
                            <li>
                                <div>
                                    <p>{note.content}</p>
                                </div>
                            </li>
                        })
                        .collect_view()
                })}
                <li>
                    <button
                        id=add_button_id
                        class="add"
                        title="Add New Note"
                        on:mousedown=|ev| ev.stop_propagation()
                        on:click=open_note_modal
                    >"+ Add Note"</button>
                </li>
            </ul>
        </div>
    }
}
