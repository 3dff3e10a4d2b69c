//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, use_client, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod components;
pub use components::{Alert, AlertKind, Spinner};

mod book_card;
pub use book_card::BookCard;

mod rating;
pub use rating::RatingStars;
