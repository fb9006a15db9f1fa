//! Registration route: a six-field form validated locally before the
//! register call. Server-side failures (e.g. a duplicate username) are
//! surfaced verbatim above the form and the entered values are retained so
//! the user can correct and resubmit.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, TextField};
use crate::features::users::client::UserApi;
use crate::features::users::types::RegisterRequest;
use crate::features::users::validate::{self, Field, FieldErrors};
use crate::routes::paths;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

/// Entered registration values, kept client-side until submission succeeds.
#[derive(Clone, Debug, Default, PartialEq)]
struct RegisterDraft {
    username: String,
    display_name: String,
    first_name: String,
    last_name: String,
    age: String,
    email: String,
}

impl RegisterDraft {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::DisplayName => &self.display_name,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Age => &self.age,
            Field::Email => &self.email,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::DisplayName => self.display_name = value,
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Age => self.age = value,
            Field::Email => self.email = value,
        }
    }

    fn fields(&self) -> [(Field, &str); 6] {
        [
            (Field::Username, self.username.as_str()),
            (Field::DisplayName, self.display_name.as_str()),
            (Field::FirstName, self.first_name.as_str()),
            (Field::LastName, self.last_name.as_str()),
            (Field::Age, self.age.as_str()),
            (Field::Email, self.email.as_str()),
        ]
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age.clone(),
            email: self.email.clone(),
        }
    }
}

/// Renders the registration form and drives the register call.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let draft = RwSignal::new(RegisterDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (page_error, set_page_error) = signal::<Option<String>>(None);
    let navigate = use_navigate();
    let api = StoredValue::new(UserApi::from_config());

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        let api = api.get_value();
        async move { api.register_user(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => navigate(paths::HOME, Default::default()),
                // The backend's own message (e.g. duplicate username) is
                // shown verbatim.
                Err(AppError::Http { message, .. }) => set_page_error.set(Some(message)),
                Err(err) => set_page_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_page_error.set(None);

        let current = draft.get_untracked();
        let found = validate::validate(current.fields());
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        errors.set(FieldErrors::new());
        register_action.dispatch(current.to_request());
    };

    view! {
        <AppShell>
            <div class="flex items-center justify-center py-10">
                <div class="bg-gray-800 shadow-lg rounded-lg p-8 w-full max-w-4xl">
                    <h1 class="text-4xl font-bold mb-6 text-center text-white">
                        "Register User"
                    </h1>
                    {move || {
                        page_error
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="mb-4">
                                        <Alert kind=AlertKind::Error message=message />
                                    </div>
                                }
                            })
                    }}
                    <form on:submit=on_submit class="space-y-6">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <RegisterField field=Field::Username draft errors set_page_error />
                            <RegisterField field=Field::DisplayName draft errors set_page_error />
                            <RegisterField field=Field::FirstName draft errors set_page_error />
                            <RegisterField field=Field::LastName draft errors set_page_error />
                            <RegisterField field=Field::Age draft errors set_page_error />
                            <RegisterField field=Field::Email draft errors set_page_error />
                        </div>
                        <Button button_type="submit" disabled=register_action.pending()>
                            "Register"
                        </Button>
                    </form>
                </div>
            </div>
        </AppShell>
    }
}

/// One registration input bound to the shared draft and error map. Editing a
/// field clears exactly that field's error and any page-level error.
#[component]
fn RegisterField(
    field: Field,
    draft: RwSignal<RegisterDraft>,
    errors: RwSignal<FieldErrors>,
    set_page_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let value = Signal::derive(move || draft.with(|d| d.value(field).to_string()));
    let error = Signal::derive(move || errors.with(|e| e.get(&field).cloned()));
    let on_input = Callback::new(move |new_value: String| {
        draft.update(|d| d.set(field, new_value));
        errors.update(|e| {
            e.remove(&field);
        });
        set_page_error.set(None);
    });

    view! {
        <TextField
            id=field.name()
            label=field.label()
            input_type=field.input_type()
            value=value
            error=error
            on_input=on_input
        />
    }
}
