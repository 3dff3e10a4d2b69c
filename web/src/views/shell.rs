use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

/// Navigation bar wrapped around every routed view.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();

    rsx! {
        Navbar {
            Link { class: "navbar-brand", to: Route::Root {}, "Book Explorer" }
            div {
                class: "navbar-links",
                Link { to: Route::Books {}, "Books" }
                if auth().user.is_some() {
                    Link { to: Route::ReadingList {}, "My Reading List" }
                }
            }
            div {
                class: "navbar-auth",
                if let Some(user) = auth().user {
                    span { class: "navbar-user", "Welcome, {user.username}" }
                    LogoutButton { class: "navbar-logout" }
                } else {
                    Link { to: Route::Login {}, "Sign In" }
                    Link { to: Route::Register {}, "Sign Up" }
                }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
