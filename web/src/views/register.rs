//! Registration page.

use api::{ApiError, FieldErrors, NewAccount};
use dioxus::prelude::*;
use ui::{use_auth, use_client};

use crate::Route;

/// Account creation form. Backend validation errors render per field.
#[component]
pub fn Register() -> Element {
    let client = use_client();
    let auth = use_auth();
    let nav = use_navigator();

    let mut form = use_signal(NewAccount::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(FieldErrors::default);
    let mut loading = use_signal(|| false);

    // Already signed in: nothing to do here.
    if auth().user.is_some() {
        nav.replace(Route::Books {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            field_errors.set(FieldErrors::default());

            let mut account = form.peek().clone();
            account.username = account.username.trim().to_string();
            account.email = account.email.trim().to_string();

            if account.username.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if account.email.is_empty() || !account.email.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if account.password != account.password2 {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match client.register(&account).await {
                Ok(()) => {
                    nav.push(Route::Login {});
                }
                Err(ApiError::Validation(errors)) => {
                    loading.set(false);
                    field_errors.set(errors);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(match err {
                        ApiError::Network(_) | ApiError::Timeout => {
                            "Registration failed. Please try again.".to_string()
                        }
                        other => other.to_string(),
                    }));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Sign Up" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }
                if !field_errors().is_empty() {
                    div {
                        class: "alert alert-error",
                        ul {
                            for (field, messages) in field_errors().0 {
                                li {
                                    key: "{field}",
                                    {format!("{field}: {}", messages.join(", "))}
                                }
                            }
                        }
                    }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                input {
                    r#type: "email",
                    placeholder: "Email Address",
                    autocomplete: "email",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "First Name",
                    value: form().first_name,
                    oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Last Name",
                    value: form().last_name,
                    oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "new-password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm Password",
                    autocomplete: "new-password",
                    value: form().password2,
                    oninput: move |evt: FormEvent| form.write().password2 = evt.value(),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign Up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign In" }
            }
        }
    }
}
