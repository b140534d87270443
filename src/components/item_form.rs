//! Item Form Component
//!
//! Input row for creating a new item or saving the one being edited.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_apply_view_state, use_app_store, AppStateStoreFields};

/// Text input plus an "Add"/"Save" button
#[component]
pub fn ItemForm() -> impl IntoView {
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = store.draft_text().get();

        // Blank text is rejected by the backend with a prompt, so send it anyway
        spawn_local(async move {
            match commands::submit_item(&text).await {
                Ok(view) => store_apply_view_state(&store, view),
                Err(e) => web_sys::console::error_1(&format!("[FORM] Submit failed: {}", e).into()),
            }
        });
    };

    let cancel = move |_| {
        spawn_local(async move {
            if let Ok(view) = commands::cancel_edit().await {
                store_apply_view_state(&store, view);
            }
        });
    };

    let is_editing = move || store.edit_target_id().get().is_some();

    view! {
        <form class="input-row" on:submit=submit>
            <input
                type="text"
                placeholder="Type something..."
                prop:value=move || store.draft_text().get()
                on:input=move |ev| { *store.draft_text().write() = event_target_value(&ev); }
            />
            <button type="submit">{move || if is_editing() { "Save" } else { "Add" }}</button>
            <Show when=is_editing>
                <button type="button" class="cancel-btn" on:click=cancel>
                    "Cancel (#" {move || store.edit_target_id().get().unwrap_or_default()} ")"
                </button>
            </Show>
        </form>
    }
}
