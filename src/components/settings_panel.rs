//! Settings Panel Component
//!
//! Change the collection URL and peek at recent backend log lines.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_apply_view_state, use_app_store};

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let store = use_app_store();

    let (api_url, set_api_url) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (logs, set_logs) = signal(Vec::<String>::new());

    let load_logs = move || {
        spawn_local(async move {
            if let Ok(lines) = commands::get_recent_logs().await {
                set_logs.set(lines);
            }
        });
    };

    // Load current config on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_resource_config().await {
                Ok(config) => set_api_url.set(config.api_url),
                Err(e) => set_error.set(Some(e)),
            }
        });
        load_logs();
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = api_url.get();
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::save_resource_config(&url).await {
                Ok(view) => store_apply_view_state(&store, view),
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
            load_logs();
        });
    };

    view! {
        <div class="settings">
            <form class="input-row" on:submit=save>
                <input
                    type="text"
                    placeholder="http://127.0.0.1:3000/items"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save URL" }}
                </button>
            </form>
            {move || error.get().map(|e| view! { <p class="settings-error">{e}</p> })}

            <div class="input-row">
                <strong>"Recent logs"</strong>
                <button type="button" on:click=move |_| load_logs()>"Refresh"</button>
            </div>
            <div class="log-lines">
                {move || logs.get().into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
            </div>
        </div>
    }
}
