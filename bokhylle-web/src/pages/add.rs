use std::sync::Arc;

use bokhylle_core::{datauri, Book};
use dioxus::prelude::*;
use dioxus_elements::FileEngine;
use tracing::info;

use crate::pages::LibraryState;
use crate::toast::show_toast;
use crate::utils::sleep_ms;
use crate::{Route, APP};

#[component]
pub fn Add() -> Element {
    let mut title = use_signal(String::default);
    let mut author = use_signal(String::default);
    let mut picked: Signal<Option<(String, Arc<dyn FileEngine>)>> = use_signal(|| None);
    let mut error = use_signal(String::default);
    let state = use_context::<LibraryState>();
    let nav = use_navigator();

    let pick_file = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            if let Some(file_name) = file_engine.files().first() {
                picked.set(Some((file_name.clone(), file_engine.clone())));
            }
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        // file presence is checked before any encoding starts
        let Some((file_name, file_engine)) = picked.cloned() else {
            error.set("Please select the book PDF!".to_string());
            return;
        };
        error.set(String::default());

        let state = state.clone();
        spawn(async move {
            let Some(bytes) = file_engine.read_file(&file_name).await else {
                info!("could not read {file_name}, aborting submission");
                return;
            };

            let content = datauri::encode(&file_name, &bytes);
            let book = Book::new(title.cloned(), author.cloned(), content);
            APP.cloned().shelf().append(book).await;

            title.set(String::default());
            author.set(String::default());
            picked.set(None);

            state.refresh().await;
            show_toast("Book added to your library");

            // short pause so the toast is seen before the page changes
            sleep_ms(600).await;
            nav.push(Route::Library {});
        });
    };

    rsx! {
        div {
            class: "max-w-md mx-auto p-4",

            h1 { class: "text-2xl font-bold mb-4", "Add a book" }

            form {
                class: "flex flex-col gap-4",
                onsubmit: submit,

                div {
                    label { r#for: "title", "Title" }
                    input {
                        class: "w-full border border-gray-300 rounded-md p-2",
                        r#type: "text",
                        id: "title",
                        required: true,
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value().clone()),
                    }
                }

                div {
                    label { r#for: "author", "Author" }
                    input {
                        class: "w-full border border-gray-300 rounded-md p-2",
                        r#type: "text",
                        id: "author",
                        value: "{author}",
                        oninput: move |evt| author.set(evt.value().clone()),
                    }
                }

                div {
                    label { r#for: "pdf", "Book PDF" }
                    input {
                        r#type: "file",
                        accept: ".pdf",
                        multiple: false,
                        id: "pdf",
                        onchange: pick_file,
                    }
                }

                if !error.read().is_empty() {
                    p {
                        class: "text-red-600 font-semibold",
                        "{error}"
                    }
                }

                button {
                    class: "bg-blue-600 text-white rounded-md p-2 hover:bg-blue-500",
                    r#type: "submit",
                    "Add to library"
                }
            }
        }
    }
}
