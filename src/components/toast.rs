//! Toast Component
//!
//! Shows load errors reported by the backend.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.toast().get().map(|message| view! {
            <div class="toast" on:click=move |_| { *store.toast().write() = None; }>{message}</div>
        })}
    }
}
