use leptos::prelude::*;

/// Shown while the collection is being fetched
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="center">
            <div class="spinner"></div>
            <p>"Loading data..."</p>
        </div>
    }
}
