use std::time::Duration;

use api::{Book, BookQuery, Debouncer, SortKey, SortOrder, SEARCH_DEBOUNCE};
use dioxus::prelude::*;
use ui::{use_client, Alert, AlertKind, BookCard, Spinner};

use crate::Route;

/// Catalog list with filter and sort controls.
#[component]
pub fn Books() -> Element {
    let client = use_client();
    let mut query = use_signal(BookQuery::default);
    let mut books = use_signal(Vec::<Book>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let debouncer = use_hook(Debouncer::new);

    // One scheduler for the mount fetch, filter edits and sort changes.
    // Every call issues a fresh ticket, so the newest filter state wins and
    // superseded fetches are dropped even if their responses arrive late.
    let fetch = {
        let client = client.clone();
        let debouncer = debouncer.clone();
        move |delay: Duration| {
            let client = client.clone();
            let ticket = debouncer.issue();
            spawn(async move {
                if !ticket.settle(delay).await {
                    return;
                }
                loading.set(true);
                let current = query.peek().clone();
                let result = client.list_books(&current).await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(list) => {
                        books.set(list);
                        error.set(None);
                    }
                    Err(_) => {
                        error.set(Some(
                            "Failed to fetch books. Please try again later.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        }
    };

    {
        let fetch = fetch.clone();
        use_effect(move || fetch(Duration::ZERO));
    }

    rsx! {
        div {
            class: "books-page",
            h1 { "Find your next book" }

            div {
                class: "filter-bar",
                div {
                    class: "form-field",
                    label { "Filter by Title" }
                    input {
                        r#type: "text",
                        value: query().title,
                        oninput: {
                            let fetch = fetch.clone();
                            move |evt: FormEvent| {
                                query.write().title = evt.value();
                                fetch(SEARCH_DEBOUNCE);
                            }
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { "Filter by Author" }
                    input {
                        r#type: "text",
                        value: query().author,
                        oninput: {
                            let fetch = fetch.clone();
                            move |evt: FormEvent| {
                                query.write().author = evt.value();
                                fetch(SEARCH_DEBOUNCE);
                            }
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { "Filter by Genre" }
                    input {
                        r#type: "text",
                        value: query().genre,
                        oninput: {
                            let fetch = fetch.clone();
                            move |evt: FormEvent| {
                                query.write().genre = evt.value();
                                fetch(SEARCH_DEBOUNCE);
                            }
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { "Sort By" }
                    select {
                        value: query().sort.as_str(),
                        onchange: {
                            let fetch = fetch.clone();
                            move |evt: FormEvent| {
                                query.write().sort = SortKey::from_param(&evt.value());
                                fetch(Duration::ZERO);
                            }
                        },
                        option { value: "title", "Title" }
                        option { value: "author", "Author" }
                        option { value: "publication_date", "Publication Date" }
                        option { value: "average_rating", "Average Rating" }
                    }
                }
                div {
                    class: "form-field",
                    label { "Sort Order" }
                    select {
                        value: query().order.as_str(),
                        onchange: {
                            let fetch = fetch.clone();
                            move |evt: FormEvent| {
                                query.write().order = SortOrder::from_param(&evt.value());
                                fetch(Duration::ZERO);
                            }
                        },
                        option { value: "asc", "Ascending" }
                        option { value: "desc", "Descending" }
                    }
                }
            }

            if loading() {
                Spinner {}
            } else if let Some(message) = error() {
                Alert { kind: AlertKind::Error, message: message }
            } else if books().is_empty() {
                Alert { kind: AlertKind::Info, message: "No books match your filters." }
            } else {
                div {
                    class: "book-list",
                    for book in books() {
                        BookCard {
                            key: "{book.id}",
                            book: book.clone(),
                            actions: rsx! {
                                Link {
                                    class: "button-link",
                                    to: Route::BookDetail { id: book.id },
                                    "View Details"
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
