//! Item List Frontend App
//!
//! Single screen: input row, item list, and a collapsible settings panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{self, SYNC_ERROR_EVENT, VIEW_STATE_EVENT};
use crate::components::{ItemForm, ItemList, LoadingView, SettingsPanel, Toast};
use crate::models::{SyncError, ViewState};
use crate::store::{store_apply_view_state, store_show_toast, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Subscribe to backend state, then pull the current snapshot
    Effect::new(move |_| {
        spawn_local(async move {
            let on_view = move |view: ViewState| store_apply_view_state(&store, view);
            if let Err(e) = commands::listen(VIEW_STATE_EVENT, on_view).await {
                web_sys::console::error_1(&format!("[APP] {}", e).into());
            }

            let on_error = move |error: SyncError| {
                store_show_toast(&store, format!("{}: {}", error.title, error.message));
            };
            if let Err(e) = commands::listen(SYNC_ERROR_EVENT, on_error).await {
                web_sys::console::error_1(&format!("[APP] {}", e).into());
            }

            match commands::get_view_state().await {
                Ok(view) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", view.items.len()).into());
                    store_apply_view_state(&store, view);
                }
                Err(e) => web_sys::console::error_1(&format!("[APP] {}", e).into()),
            }
        });
    });

    let reload = move |_| {
        spawn_local(async move {
            if let Ok(view) = commands::fetch_items().await {
                store_apply_view_state(&store, view);
            }
        });
    };

    view! {
        <main class="container">
            <h1 class="title">"Item List"</h1>

            {move || if store.is_loading().get() {
                view! { <LoadingView /> }.into_any()
            } else {
                view! {
                    <ItemForm />
                    <ItemList />
                    <p class="item-count">{move || format!("{} items", store.items().get().len())}</p>
                }.into_any()
            }}

            <div class="input-row">
                <button type="button" on:click=reload>"Reload"</button>
                <button
                    type="button"
                    on:click=move |_| {
                        let show = store.show_settings().get_untracked();
                        *store.show_settings().write() = !show;
                    }
                >
                    {move || if store.show_settings().get() { "Hide settings" } else { "Settings" }}
                </button>
            </div>
            <Show when=move || store.show_settings().get()>
                <SettingsPanel />
            </Show>

            <Toast />
        </main>
    }
}
