//! Modal confirmation for destructive actions. The dialog is a two-step
//! protocol: the caller opens it, and the user resolves it through the
//! confirm or cancel callback. Nothing happens until one of them runs.

use crate::components::ui::button::{Button, ButtonStyle};
use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: &'static str,
    #[prop(into)] open: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm">
                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-md overflow-hidden">
                    <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
                    </div>
                    <div class="p-6 text-sm text-gray-700 dark:text-gray-300">{message}</div>
                    <div class="px-6 py-4 flex justify-end gap-3 border-t border-gray-100 dark:border-gray-700">
                        <Button on_click=Callback::new(move |()| on_cancel.run(()))>
                            "Cancel"
                        </Button>
                        <Button
                            style=ButtonStyle::Danger
                            on_click=Callback::new(move |()| on_confirm.run(()))
                        >
                            "Delete"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
