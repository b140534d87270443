//! Item List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.items().get().is_empty()
            fallback=|| view! { <p class="empty">"No items yet."</p> }
        >
            <For
                each=move || store.items().get()
                key=|item| (item.id, item.name.clone())
                children=move |item| view! { <ItemRow item=item /> }
            />
        </Show>
    }
}
