mod home;
mod not_found;
mod profile;
mod register;

pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by navigation links and redirects.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const REGISTER: &str = "/register";

    pub fn profile(user_id: &str) -> String {
        format!("/{user_id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/:user_id") view=ProfilePage />
        </Routes>
    }
}
