use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-10 w-10 animate-spin rounded-full border-4 border-gray-700 border-t-green-500"
            role="status"
            aria-live="polite"
            aria-label="Loading profile data"
        ></div>
    }
}
