//! Full-height busy indicator.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-label="Loading">
            <div class="loader__spinner"></div>
        </div>
    }
}
