//! Item Row Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::Item;
use crate::store::{store_apply_view_state, use_app_store, AppStateStoreFields};

/// A single item with Edit and Delete actions
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    let edit = move |_| {
        spawn_local(async move {
            match commands::begin_edit(id).await {
                Ok(view) => store_apply_view_state(&store, view),
                Err(e) => web_sys::console::error_1(&format!("[ROW] Edit failed: {}", e).into()),
            }
        });
    };

    let delete = move |_| {
        spawn_local(async move {
            if let Ok(view) = commands::remove_item(id).await {
                store_apply_view_state(&store, view);
            }
        });
    };

    view! {
        <div class=move || if store.edit_target_id().get() == Some(id) { "item editing" } else { "item" }>
            <span class="item-name">{item.name}</span>
            <div class="item-buttons">
                <button class="edit-btn" on:click=edit>"Edit"</button>
                <button class="delete-btn" on:click=delete>"Delete"</button>
            </div>
        </div>
    }
}
