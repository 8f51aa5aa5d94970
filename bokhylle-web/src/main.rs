#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

use crate::pages::{Add, Library, LibraryState};
use crate::utils::App;

mod components;
mod nav;
mod pages;
mod toast;
mod utils;

static APP: GlobalSignal<App> = Signal::global(App::new);
static CURRENT_ROUTE: GlobalSignal<Route> = Signal::global(|| Route::Add {});

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting bokhylle");

    dioxus::launch(TheApp);
}

#[component]
pub fn TheApp() -> Element {
    use_context_provider(LibraryState::new);

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/tailwind.css")
        }

        div {
            class: "bg-white min-h-screen",
            Router::<Route> {}
        }
    }
}

#[component]
fn Wrapper() -> Element {
    *CURRENT_ROUTE.write() = use_route::<Route>();

    rsx! {
        div {
            class: "h-screen overflow-hidden flex flex-col",

            crate::nav::nav {}

            div {
                class: "flex-1 overflow-y-auto",
                Outlet::<Route> {}
            }

            crate::toast::ToastOverlay {}
        }
    }
}

#[derive(Copy, Clone, Routable, Debug, PartialEq, Hash, Eq)]
pub enum Route {
    #[layout(Wrapper)]
    #[route("/")]
    Add {},
    #[route("/library")]
    Library {},
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Add {} => "add book",
            Route::Library {} => "my library",
        }
    }
}
