use leptos::prelude::*;
use leptos::{ev, html::Dialog, html::Div};

use crate::core::config::BoardConfig;
use crate::core::layout::LayoutMetrics;
use crate::core::models::ColumnId;
use crate::features::board::services::{element_rect, pointer, root_font_px};
use crate::features::board::{use_board, BoardColumn, BoardHeader, DragGhost, TextEntryModal};

#[component]
pub fn BoardPage() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let show_ghost = config.show_ghost;
    let fallback_font_px = config.fallback_root_font_px;
    let default_title = config.default_column_title.clone();
    let hook = use_board(config);

    let container_ref: NodeRef<Div> = NodeRef::new();
    let column_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let note_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // Column whose "add note" button opened the note dialog
    let (note_target, set_note_target) = signal::<Option<ColumnId>>(None);

    // Moves and releases are tracked on the window so a fast pointer that
    // leaves the column keeps driving the interaction.
    let move_handle = window_event_listener(ev::mousemove, move |ev| {
        let container_width = container_ref
            .get_untracked()
            .map(|container| element_rect(&container).width)
            .unwrap_or_default();
        let metrics = LayoutMetrics {
            container_width,
            root_font_px: root_font_px(fallback_font_px),
        };
        hook.pointer_move(pointer(&ev), metrics);
    });
    let up_handle = window_event_listener(ev::mouseup, move |_| hook.pointer_up());
    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });

    let open_column_modal = Callback::new(move |_: ()| {
        if let Some(dialog) = column_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let open_note_modal = Callback::new(move |column_id: ColumnId| {
        set_note_target.set(Some(column_id));
        if let Some(dialog) = note_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    let save_column = Callback::new(move |title: String| hook.add_column(title));

    let save_note = Callback::new(move |text: String| {
        if let Some(column_id) = note_target.get_untracked() {
            hook.add_note(column_id, text);
        }
        set_note_target.set(None);
    });

    let cancel_note = Callback::new(move |_: ()| set_note_target.set(None));

    let column_ids = move || {
        hook.board.with(|board| {
            board
                .columns()
                .iter()
                .filter_map(|column| column.id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="board-page">
            <BoardHeader hook=hook on_add_column=open_column_modal />

            <div
                class="container"
                class:edit-mode=move || hook.layout.with(|layout| layout.edit_mode())
                node_ref=container_ref
            >
                <For
                    each=column_ids
                    key=|column_id| column_id.clone()
                    let:column_id
                >
                    <BoardColumn column_id=column_id hook=hook on_add_note=open_note_modal />
                </For>
            </div>

            <Show when=move || show_ghost>
                <DragGhost hook=hook />
            </Show>

            <TextEntryModal
                heading="New Column"
                placeholder="Column title..."
                initial_value=default_title
                on_save=save_column
                dialog_ref=column_dialog_ref
            />

            <TextEntryModal
                heading="New Note"
                placeholder="Note..."
                on_save=save_note
                on_cancel=cancel_note
                dialog_ref=note_dialog_ref
            />
        </div>
    }
}
