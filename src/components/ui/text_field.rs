//! Labeled text input with an optional per-field error annotation. The error
//! message renders directly under the input and tints its border.

use leptos::prelude::*;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into, default = Signal::from(None))] error: Signal<Option<String>>,
    #[prop(optional, into, default = Signal::from(false))] readonly: Signal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let input_class = move || {
        let border = if error.get().is_some() {
            "border-red-500"
        } else {
            "border-gray-300"
        };
        format!(
            "w-full px-4 py-2 border rounded-lg bg-white text-gray-700 focus:border-blue-500 focus:ring-2 focus:ring-blue-200 {border}"
        )
    };

    view! {
        <div>
            <label class="block text-white font-semibold mb-1" for=id>
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class=input_class
                value=move || value.get()
                readonly=move || readonly.get()
                on:input=move |event| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&event));
                    }
                }
            />
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })
            }}
        </div>
    }
}
