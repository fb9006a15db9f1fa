//! Profile route: fetches one record on mount, then lets the user toggle an
//! in-place edit form, submit a validated update, or delete the record after
//! confirmation. All state transitions go through `ProfileSync`; this module
//! only wires them to the DOM and the HTTP client.

use crate::components::{
    Alert, AlertKind, AppShell, Button, ButtonStyle, ConfirmDialog, Spinner, TextField,
};
use crate::features::users::client::UserApi;
use crate::features::users::sync::{LoadState, ProfileSync};
use crate::features::users::types::{self, UpdateRequest};
use crate::features::users::validate::Field;
use crate::routes::paths;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct ProfileParams {
    user_id: Option<String>,
}

/// Renders the profile view for the record named in the route.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params::<ProfileParams>();
    let navigate = use_navigate();
    let api = StoredValue::new(UserApi::from_config());
    let sync = RwSignal::new(ProfileSync::new(String::new()));

    // Fetch on mount, and start over if the route parameter changes.
    Effect::new(move |_| {
        let id = params.get().ok().and_then(|p| p.user_id).unwrap_or_default();
        sync.set(ProfileSync::new(id.clone()));
        let api = api.get_value();
        spawn_local(async move {
            let result = api.fetch_user(&id).await;
            // A resolution arriving after unmount is dropped; one arriving
            // after navigating to another profile is rejected by id.
            let _ = sync.try_update(|s| s.finish_load(&id, result));
        });
    });

    let update_action = Action::new_local(move |request: &UpdateRequest| {
        let request = request.clone();
        let api = api.get_value();
        async move { api.update_user(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            sync.update(|s| s.finish_update(result));
        }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        let api = api.get_value();
        async move { api.delete_user(&id).await }
    });

    let navigate_for_effect = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            sync.update(|s| s.finish_delete(result));
            // The record is gone; leave the profile view entirely.
            if sync.with_untracked(|s| s.deleted()) {
                navigate_for_effect(paths::HOME, Default::default());
            }
        }
    });

    let on_submit = Callback::new(move |()| {
        let request = sync.try_update(|s| s.begin_update()).flatten();
        if let Some(request) = request {
            update_action.dispatch(request);
        }
    });

    let on_confirm_delete = Callback::new(move |()| {
        let confirmed = sync.try_update(|s| s.confirm_delete()).unwrap_or(false);
        if confirmed {
            let id = sync.with_untracked(|s| s.user_id().to_string());
            delete_action.dispatch(id);
        }
    });

    view! {
        <AppShell>
            {move || match sync.with(|s| s.load_state().clone()) {
                LoadState::Loading => {
                    view! {
                        <div class="flex items-center justify-center py-20">
                            <Spinner />
                        </div>
                    }
                    .into_any()
                }
                LoadState::Failed(message) => {
                    view! {
                        <div class="flex items-center justify-center py-20">
                            <Alert
                                kind=AlertKind::Error
                                message=format!("Error fetching user data: {message}")
                            />
                        </div>
                    }
                    .into_any()
                }
                LoadState::Ready => {
                    view! { <ProfileCard sync on_submit on_confirm_delete /> }.into_any()
                }
            }}
        </AppShell>
    }
}

/// The loaded profile card: read-only display or in-place edit form,
/// depending on the edit-mode flag.
#[component]
fn ProfileCard(
    sync: RwSignal<ProfileSync>,
    on_submit: Callback<()>,
    on_confirm_delete: Callback<()>,
) -> impl IntoView {
    let pending = Signal::derive(move || sync.with(|s| s.pending().is_some()));
    let editing = Signal::derive(move || sync.with(|s| s.form().editing()));
    let username =
        Signal::derive(move || sync.with(|s| s.profile().map(|p| p.username.clone())).unwrap_or_default());
    let created_at = Signal::derive(move || {
        sync.with(|s| s.profile().map(|p| types::registration_date(&p.created_at)))
            .unwrap_or_default()
    });

    view! {
        <div class="flex items-center justify-center py-10">
            <div class="bg-gray-800 shadow-lg rounded-lg p-8 w-full max-w-3xl relative space-y-6">
                <div class="flex items-center justify-between">
                    <Button on_click=Callback::new(move |()| sync.update(|s| s.toggle_edit()))>
                        {move || if editing.get() { "View" } else { "Edit" }}
                    </Button>
                    <Button
                        style=ButtonStyle::Danger
                        disabled=pending
                        on_click=Callback::new(move |()| sync.update(|s| s.request_delete()))
                    >
                        "Delete"
                    </Button>
                </div>
                <h1 class="text-3xl font-bold text-center text-white">"User Profile"</h1>
                {move || {
                    sync.with(|s| s.page_error().map(str::to_string))
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <form
                    on:submit=move |event: SubmitEvent| {
                        event.prevent_default();
                        on_submit.run(());
                    }
                    class="space-y-6"
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <TextField
                            id="username"
                            label="Username"
                            value=username
                            readonly=true
                        />
                        <DraftField sync field=Field::DisplayName />
                        <DraftField sync field=Field::FirstName />
                        <DraftField sync field=Field::LastName />
                        <DraftField sync field=Field::Age />
                        <DraftField sync field=Field::Email />
                    </div>
                    <div class="flex">
                        <p class="text-white mr-1">"Registered on:"</p>
                        <p class="text-green-500">{move || created_at.get()}</p>
                    </div>
                    <Show when=move || editing.get()>
                        <Button button_type="submit" disabled=pending>
                            "Update Profile"
                        </Button>
                    </Show>
                </form>
            </div>
        </div>
        <ConfirmDialog
            title="Delete user"
            message="Are you sure you want to delete this user?"
            open=Signal::derive(move || sync.with(|s| s.confirming_delete()))
            on_confirm=on_confirm_delete
            on_cancel=Callback::new(move |()| sync.update(|s| s.cancel_delete()))
        />
    }
}

/// One editable profile input bound to the draft and error map.
#[component]
fn DraftField(sync: RwSignal<ProfileSync>, field: Field) -> impl IntoView {
    let value = Signal::derive(move || sync.with(|s| s.form().draft().value(field).to_string()));
    let error = Signal::derive(move || sync.with(|s| s.form().error(field).map(str::to_string)));
    let readonly = Signal::derive(move || sync.with(|s| !s.form().editing()));
    let on_input = Callback::new(move |new_value: String| {
        sync.update(|s| s.set_field(field, new_value));
    });

    view! {
        <TextField
            id=field.name()
            label=field.label()
            input_type=field.input_type()
            value=value
            error=error
            readonly=readonly
            on_input=on_input
        />
    }
}
