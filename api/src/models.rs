//! Wire types for the book catalog backend.
//!
//! All of these are value snapshots fetched per view; the client holds no
//! authoritative copy and performs no write-back reconciliation.

use serde::{Deserialize, Serialize};

/// Public identity of a user, as embedded in notes and auth responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

/// A catalog entry. Read-only from the client's perspective except for the
/// derived `user_rating` side effect of submitting a rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub page_count: u32,
    /// ISO date string as the backend serializes it.
    pub publication_date: String,
    /// Description shown on the detail page.
    #[serde(default)]
    pub about: String,
    /// Aggregate over all users, 0.0 while unrated.
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_ratings: u32,
    /// The signed-in user's own rating, once they have rated this book.
    #[serde(default)]
    pub user_rating: Option<u8>,
}

/// A review left on a book. Only its author may edit or delete it; the
/// backend enforces ownership, the UI merely reflects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub user: UserSummary,
}

/// Membership of a book in the current user's reading list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingListEntry {
    pub id: i64,
    pub book: Book,
    #[serde(default)]
    pub added_at: Option<String>,
}

/// Login payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration payload. `password2` is the confirmation the backend
/// validates against `password`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserSummary,
    /// Opaque bearer token.
    pub access: String,
}
