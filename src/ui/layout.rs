// src/ui/layout.rs - Authenticated application shell: sidebar, header, content

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    router::{nav, Route},
    state::{use_app_dispatch, use_app_state, AppAction},
};

const NAV_ROUTES: [Route; 4] = [
    Route::Dashboard {},
    Route::Orders {},
    Route::Contacts {},
    Route::Reviews {},
];

/// Shell wrapping every authenticated page
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex",
            Sidebar {}
            div {
                class: "flex-1 flex flex-col min-w-0",
                Header {}
                main {
                    class: "flex-1 p-6 overflow-y-auto",
                    {children}
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let current: Route = use_route();

    rsx! {
        aside {
            class: "w-64 bg-white border-r border-gray-200 hidden md:flex md:flex-col",
            div {
                class: "h-16 flex items-center px-6 border-b border-gray-200",
                span { class: "text-xl mr-2", "🛍️" }
                span {
                    class: "text-lg font-semibold text-gray-900",
                    "Storefront Admin"
                }
            }
            nav {
                class: "flex-1 px-3 py-4 space-y-1",
                for route in NAV_ROUTES {
                    SidebarLink {
                        key: "{nav::route_title(&route)}",
                        route: route.clone(),
                        active: nav::is_active_route(&current, &route)
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarLink(route: Route, active: bool) -> Element {
    let link_class = if active {
        "group flex items-center px-3 py-2 text-sm font-medium rounded-md bg-blue-50 text-blue-700"
    } else {
        "group flex items-center px-3 py-2 text-sm font-medium rounded-md text-gray-600 hover:bg-gray-50 hover:text-gray-900"
    };

    rsx! {
        Link {
            to: route.clone(),
            class: link_class,
            span { class: "mr-3 text-lg", "{nav::route_icon(&route)}" }
            "{nav::route_title(&route)}"
        }
    }
}

#[component]
fn Header() -> Element {
    let app_state = use_app_state();
    let dispatch = use_app_dispatch();
    let navigator = use_navigator();

    let admin_name = app_state
        .session
        .as_ref()
        .map(|s| s.user.name.clone())
        .unwrap_or_else(|| "Admin".to_string());
    let admin_initial = admin_name.chars().next().unwrap_or('A');

    rsx! {
        header {
            class: "h-16 bg-white border-b border-gray-200 flex items-center justify-between px-6",
            div {
                class: "text-sm text-gray-500",
                "Store administration"
            }
            div {
                class: "flex items-center space-x-4",
                div {
                    class: "flex items-center",
                    div {
                        class: "h-8 w-8 rounded-full bg-blue-500 flex items-center justify-center",
                        span {
                            class: "text-sm font-medium text-white",
                            "{admin_initial}"
                        }
                    }
                    span {
                        class: "ml-2 text-sm font-medium text-gray-900",
                        "{admin_name}"
                    }
                }
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-gray-500 hover:text-gray-900",
                    onclick: move |_| {
                        dispatch(AppAction::ClearSession);
                        navigator.push(Route::Login {});
                    },
                    "Sign out"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_covers_every_resource_page() {
        let titles: Vec<_> = NAV_ROUTES.iter().map(nav::route_title).collect();
        assert_eq!(titles, vec!["Dashboard", "Orders", "Contacts", "Reviews"]);
    }
}
