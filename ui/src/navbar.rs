use dioxus::prelude::*;

/// Top navigation bar container; the app supplies the links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}
