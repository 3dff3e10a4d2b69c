//! Small feedback primitives shared by the views.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertKind {
    Error,
    Info,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-error",
            AlertKind::Info => "alert alert-info",
            AlertKind::Success => "alert alert-success",
        }
    }
}

/// Inline status message.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> Element {
    rsx! {
        div {
            class: kind.class(),
            "{message}"
        }
    }
}

/// Centered loading indicator.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}
