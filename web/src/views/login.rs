//! Sign-in page.

use api::{ApiError, Credentials};
use dioxus::prelude::*;
use ui::{use_auth, use_client, AuthState};

use crate::Route;

/// Username/password sign-in form.
#[component]
pub fn Login() -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
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
            loading.set(true);

            let credentials = Credentials {
                username: username().trim().to_string(),
                password: password(),
            };
            match client.login(&credentials).await {
                Ok(response) => {
                    client
                        .session()
                        .login(response.user.clone(), response.access);
                    auth.set(AuthState {
                        user: Some(response.user),
                    });
                    nav.push(Route::Root {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(match err {
                        ApiError::Network(_) | ApiError::Timeout => {
                            "An error occurred during login. Please try again.".to_string()
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
            h1 { "Sign In" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading() || username().is_empty() || password().is_empty(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign Up" }
            }
        }
    }
}
