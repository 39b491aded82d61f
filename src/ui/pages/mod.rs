// src/ui/pages/mod.rs - Page components and shared list chrome

use dioxus::prelude::*;

use crate::model::Pagination;

// Module declarations
mod contacts;
mod dashboard;
mod login;
mod not_found;
mod orders;
mod reviews;

// Re-exports
pub use contacts::Contacts;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use orders::Orders;
pub use reviews::Reviews;

/// Common page wrapper component
#[component]
pub fn PageWrapper(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "space-y-6",

            if !title.is_empty() {
                div {
                    class: "md:flex md:items-center md:justify-between",
                    div {
                        class: "flex-1 min-w-0",
                        h1 {
                            class: "text-2xl font-bold leading-7 text-gray-900 sm:text-3xl sm:truncate",
                            "{title}"
                        }
                        if let Some(subtitle) = subtitle {
                            p {
                                class: "mt-1 text-sm text-gray-500",
                                "{subtitle}"
                            }
                        }
                    }
                    if let Some(actions) = actions {
                        div {
                            class: "mt-4 flex md:mt-0 md:ml-4",
                            {actions}
                        }
                    }
                }
            }

            {children}
        }
    }
}

/// Inline error banner. Rendered above the (possibly stale) list so the
/// prior data stays visible and the page stays interactive.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-50 border-l-4 border-red-400 p-4 rounded-md",
            div {
                class: "flex",
                span { class: "text-red-400 mr-3", "⚠️" }
                p {
                    class: "text-sm text-red-700",
                    "{message}"
                }
            }
        }
    }
}

/// Error state component for pages with nothing else to show
#[component]
pub fn PageError(
    #[props(default = "An error occurred".to_string())] message: String,
    #[props(default = None)] retry_action: Option<Callback<()>>,
) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div {
                class: "text-6xl text-red-500 mb-4",
                "⚠️"
            }
            h2 {
                class: "text-2xl font-bold text-gray-900 mb-2",
                "Oops! Something went wrong"
            }
            p {
                class: "text-gray-600 mb-6",
                "{message}"
            }
            if let Some(retry) = retry_action {
                button {
                    r#type: "button",
                    class: "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500",
                    onclick: move |_| retry.call(()),
                    "Try Again"
                }
            }
        }
    }
}

/// Empty state component for pages
#[component]
pub fn EmptyState(
    #[props(default = "📭".to_string())] icon: String,
    #[props(default = "No data available".to_string())] title: String,
    #[props(default = "There's nothing to show here yet.".to_string())] description: String,
) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div {
                class: "text-6xl mb-4",
                "{icon}"
            }
            h3 {
                class: "text-lg font-medium text-gray-900 mb-2",
                "{title}"
            }
            p {
                class: "text-gray-500 mb-6",
                "{description}"
            }
        }
    }
}

/// Stat card component for summary tiles
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default = None)] icon: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "bg-white overflow-hidden shadow rounded-lg",
            div {
                class: "p-5",
                div {
                    class: "flex items-center",
                    div {
                        class: "flex-shrink-0",
                        if let Some(icon) = icon {
                            span {
                                class: "text-2xl",
                                "{icon}"
                            }
                        }
                    }
                    div {
                        class: "ml-5 w-0 flex-1",
                        dl {
                            dt {
                                class: "text-sm font-medium text-gray-500 truncate",
                                "{title}"
                            }
                            dd {
                                class: "text-2xl font-semibold text-gray-900",
                                "{value}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Page numbers rendered as controls: one for every page the backend reports.
pub fn page_numbers(total_pages: u32) -> Vec<u32> {
    (1..=total_pages.max(1)).collect()
}

/// Pagination controls shared by every list page
#[component]
pub fn Pager(pagination: Pagination, on_page: EventHandler<u32>) -> Element {
    if pagination.total_pages <= 1 {
        return rsx! {};
    }

    let current = pagination.current_page;
    let prev_disabled = !pagination.has_prev_page;
    let next_disabled = !pagination.has_next_page;

    rsx! {
        div {
            class: "flex items-center justify-between bg-white px-4 py-3 rounded-lg shadow",
            p {
                class: "text-sm text-gray-700",
                "Page {pagination.current_page} of {pagination.total_pages}"
            }
            nav {
                class: "inline-flex space-x-1",
                button {
                    r#type: "button",
                    class: "px-3 py-1 text-sm font-medium rounded-md border border-gray-300 text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: prev_disabled,
                    onclick: move |_| on_page.call(current.saturating_sub(1).max(1)),
                    "Previous"
                }
                for page in page_numbers(pagination.total_pages) {
                    button {
                        key: "{page}",
                        r#type: "button",
                        class: if page == current {
                            "px-3 py-1 text-sm font-medium rounded-md bg-blue-600 text-white"
                        } else {
                            "px-3 py-1 text-sm font-medium rounded-md border border-gray-300 text-gray-700 bg-white hover:bg-gray-50"
                        },
                        onclick: move |_| on_page.call(page),
                        "{page}"
                    }
                }
                button {
                    r#type: "button",
                    class: "px-3 py-1 text-sm font-medium rounded-md border border-gray-300 text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: next_disabled,
                    onclick: move |_| on_page.call(current + 1),
                    "Next"
                }
            }
        }
    }
}

/// Overlay bound to exactly one selected item. Clicking the backdrop closes
/// it; clicks inside the panel do not propagate out.
#[component]
pub fn DetailModal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-gray-500 bg-opacity-75 p-4",
            onclick: move |_| on_close.call(()),
            div {
                class: "relative bg-white rounded-lg shadow-xl max-w-2xl w-full max-h-full overflow-y-auto",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-gray-200",
                    h3 {
                        class: "text-lg font-medium text-gray-900",
                        "{title}"
                    }
                    button {
                        r#type: "button",
                        class: "text-gray-400 hover:text-gray-600 text-xl leading-none",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div {
                    class: "px-6 py-4",
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers_renders_one_control_per_page() {
        assert_eq!(page_numbers(1), vec![1]);
        assert_eq!(page_numbers(4), vec![1, 2, 3, 4]);
        assert_eq!(page_numbers(4).len(), 4);
    }

    #[test]
    fn test_page_numbers_never_empty() {
        assert_eq!(page_numbers(0), vec![1]);
    }

    #[test]
    fn test_page_wrapper_creation() {
        let _wrapper = rsx! {
            PageWrapper {
                title: "Test Page".to_string(),
                div { "Content" }
            }
        };
    }

    #[test]
    fn test_stat_card_creation() {
        let _card = rsx! {
            StatCard {
                title: "Total Reviews".to_string(),
                value: "13".to_string(),
                icon: Some("⭐".to_string())
            }
        };
    }
}
