//! Authentication context and hooks for the UI.

use api::{Client, PlatformStore, Session, UserSummary};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserSummary>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared API client.
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Provider component that owns the session and the API client.
/// Wrap the app with this component; it restores any persisted session
/// before the first view issues a request.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(|| {
        let session = Session::new(PlatformStore::default());
        session.restore();
        Client::new(api::default_base_url(), session)
    });
    let restored = client.session().user();
    use_context_provider(move || Signal::new(AuthState { user: restored }));

    rsx! {
        {children}
    }
}

/// Button that logs the current user out and returns to the catalog.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_client();
    let mut auth = use_auth();

    let onclick = move |_| {
        client.session().logout();
        auth.set(AuthState { user: None });
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
