//! Shared layout wrapper with header navigation and a content container. It
//! centralizes the header markup and the mobile menu toggle so routes can
//! focus on content.

use crate::app_lib::build_info;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with the header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-xl font-semibold whitespace-nowrap text-white">
                            "Profiles"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-400 rounded-lg md:hidden hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 rounded-lg md:flex-row md:space-x-8 md:mt-0 bg-gray-800 md:bg-transparent">
                            <li>
                                <A
                                    href=paths::HOME
                                    {..}
                                    class="block py-2 px-3 rounded text-white md:hover:text-blue-500 md:p-0 hover:bg-gray-700 md:hover:bg-transparent"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Users"
                                </A>
                            </li>
                            <li>
                                <A
                                    href=paths::REGISTER
                                    {..}
                                    class="block py-2 px-3 rounded text-white md:hover:text-blue-500 md:p-0 hover:bg-gray-700 md:hover:bg-transparent"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Register"
                                </A>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1 max-w-screen-xl w-full mx-auto p-4">{children()}</main>
            <footer class="max-w-screen-xl w-full mx-auto p-4 text-xs text-gray-500">
                <span title=build_info::git_commit_hash()>"profiles-web"</span>
            </footer>
        </div>
    }
}
