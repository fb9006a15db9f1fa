//! Landing page listing all registered users. Each entry links to the
//! profile view for that record.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::users::client::UserApi;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the user list and fetches data on mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let users = LocalResource::new(move || async move { UserApi::from_config().list_users().await });

    view! {
        <AppShell>
            <div class="p-4 text-center space-y-6">
                <h1 class="text-4xl font-bold text-white">"Registered Users"</h1>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match users.get() {
                        Some(Ok(list)) if list.is_empty() => {
                            view! {
                                <p class="text-gray-400">"No users registered yet."</p>
                            }
                            .into_any()
                        }
                        Some(Ok(list)) => {
                            view! {
                                <ul class="space-y-2 max-w-md mx-auto">
                                    <For
                                        each=move || list.clone()
                                        key=|user| user.id.clone()
                                        children=|user| {
                                            view! {
                                                <li class="bg-gray-800 rounded-lg shadow">
                                                    <A
                                                        href=paths::profile(&user.id)
                                                        {..}
                                                        class="block px-4 py-3 text-blue-400 hover:text-blue-300 hover:bg-gray-700 rounded-lg"
                                                    >
                                                        {user.username}
                                                    </A>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            }
                            .into_any()
                        }
                        Some(Err(err)) => {
                            view! {
                                <Alert
                                    kind=AlertKind::Error
                                    message=format!("Error fetching users: {err}")
                                />
                            }
                            .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}
