//! # Data access for the Book Explorer frontend
//!
//! Everything the views need to talk to the catalog backend: the session
//! store, the configured HTTP client, one typed call per endpoint, and the
//! debounce policy for search-as-you-type.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | Authenticated identity + token, persisted across reloads |
//! | [`client`] | HTTP wrapper: bearer attachment, failure classification, forced logout on expiry |
//! | [`auth`], [`books`], [`notes`], [`reading_list`] | Typed resource calls, one request per call |
//! | [`coalesce`] | Debounced, last-request-wins fetch coalescing |
//! | [`models`] | Wire types |
//! | [`error`] | Failure taxonomy shared by every call |
//!
//! The HTTP send path only exists on wasm. On native targets the resource
//! calls compile to stubs that fail with a network error, so shared crates
//! and the test suite build everywhere.

pub mod auth;
pub mod books;
pub mod client;
pub mod coalesce;
pub mod error;
pub mod models;
pub mod notes;
pub mod reading_list;
pub mod session;

pub use books::{BookQuery, SortKey, SortOrder};
pub use client::{default_base_url, ApiClient};
pub use coalesce::{Debouncer, Ticket, SEARCH_DEBOUNCE};
pub use error::{ApiError, FieldErrors};
pub use models::{
    AuthResponse, Book, Credentials, NewAccount, Note, ReadingListEntry, UserSummary,
};
pub use session::{Account, CredentialStore, MemoryStore, Session};

#[cfg(target_arch = "wasm32")]
pub use session::BrowserStore;

/// Credential store used on the current platform: `localStorage` in the
/// browser, an in-memory map elsewhere.
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = session::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = session::MemoryStore;

/// The client type the application passes around.
pub type Client = ApiClient<PlatformStore>;
