use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use bokhylle_core::{filter, Book};
use dioxus::prelude::*;
use tracing::info;

use crate::components::BookCard;
use crate::APP;

/// Shared across pages so the add flow can refresh the list and the count
/// without the library page being mounted.
#[derive(Clone)]
pub struct LibraryState {
    pub books: Signal<Vec<Book>>,
    pub search: Signal<String>,
    pub refreshed: Arc<AtomicBool>,
}

impl LibraryState {
    pub fn new() -> Self {
        Self {
            books: Default::default(),
            search: Default::default(),
            refreshed: Default::default(),
        }
    }

    fn maybe_refresh(&self) {
        if !self.refreshed.load(Ordering::SeqCst) {
            let selv = self.clone();
            spawn(async move {
                selv.refresh().await;
                selv.refreshed.store(true, Ordering::SeqCst);
            });
        }
    }

    pub async fn refresh(&self) {
        info!("refreshing books");
        let books = APP.cloned().shelf().load_all().await;
        self.books.clone().set(books);
    }
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Library() -> Element {
    let state = use_context::<LibraryState>();
    state.maybe_refresh();
    let mut search = state.search.clone();

    // the count always shows the stored total, never the filtered one
    let total = state.books.read().len();

    let query = search.cloned();
    let visible: Vec<Book> = state
        .books
        .read()
        .iter()
        .filter(|book| filter::matches(book, &query))
        .cloned()
        .collect();

    let status = filter::ShelfStatus::compute(total, visible.len());
    let panel: Element = match status.panel() {
        Some((title, msg)) => rsx! {
            div {
                class: "text-center text-gray-600 mt-8",
                h2 { class: "text-xl font-bold", "{title}" }
                p { "{msg}" }
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto p-4",

            h1 { class: "text-2xl font-bold mb-2", "My library" }
            p {
                class: "text-gray-600 mb-4",
                "books: "
                span { "{total}" }
            }

            input {
                class: "w-full border border-gray-300 rounded-md p-2 mb-4 text-gray-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                placeholder: "Search by title or author",
                value: "{search}",
                oninput: move |evt| search.set(evt.value().clone()),
            }

            div {
                style: "display: flex; flex-direction: column; gap: 8px; text-align: left;",

                for book in visible {
                    BookCard { book: book.clone() }
                }
            }

            { panel }
        }
    }
}
