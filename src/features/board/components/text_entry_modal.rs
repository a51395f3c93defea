use leptos::prelude::*;
use leptos::{ev, html::Dialog};

/// Modal text prompt. Submitting saves, closing or cancelling discards.
#[component]
pub fn TextEntryModal(
    #[prop(into)] heading: String,
    #[prop(into)] placeholder: String,
    #[prop(into, optional)] initial_value: String,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into, optional)] on_cancel: Option<Callback<()>>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (value, set_value) = signal(initial_value.clone());

    let handle_submit = {
        let initial_value = initial_value.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let text = value.get_untracked();
            set_value.set(initial_value.clone());
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
            on_save.run(text);
        }
    };

    let close_modal = move |_| {
        set_value.set(initial_value.clone());
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
        if let Some(on_cancel) = on_cancel {
            on_cancel.run(());
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{heading}</h3>
                    <button type="button" class="modal-close" on:click=close_modal.clone()>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <input
                            type="text"
                            placeholder=placeholder
                            on:input=move |ev| set_value.set(event_target_value(&ev))
                            prop:value=move || value.get()
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
