use dioxus::prelude::*;

use ui::AuthProvider;
use views::{BookDetail, Books, Login, ReadingList, Register, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/books")]
        Books {},
        #[route("/books/:id")]
        BookDetail { id: i64 },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/reading-list")]
        ReadingList {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/books`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Books {});
    rsx! {}
}
