#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::profile_store::{self, CURRENT_USER};

// Modules
mod components;
mod stores;

use components::ProfileCard;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting profile card app");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let user = CURRENT_USER.read().clone();

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center p-4",

            ProfileCard {
                user,
                on_edit: move |_| profile_store::request_edit(),
            }
        }
    }
}
