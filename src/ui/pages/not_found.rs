// src/ui/pages/not_found.rs

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;

/// 404 page for unmatched routes
#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        div {
            class: "text-center",
            div {
                class: "text-6xl mb-4",
                "🔍"
            }
            h1 {
                class: "text-4xl font-bold text-gray-900 mb-2",
                "404"
            }
            p {
                class: "text-gray-600 mb-2",
                "The page \"/{path}\" could not be found."
            }
            Link {
                to: Route::Dashboard {},
                class: "inline-flex items-center px-4 py-2 mt-4 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700",
                "Back to Dashboard"
            }
        }
    }
}
