// src/ui/router.rs

use crate::ui::{
    layout::Layout,
    pages::{
        Contacts as ContactsPage, Dashboard as DashboardPage, Login as LoginPage,
        NotFound as NotFoundPage, Orders as OrdersPage, Reviews as ReviewsPage,
    },
    state::use_app_state,
};
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/")]
    #[redirect("/dashboard", || Route::Dashboard {})]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/orders")]
    Orders {},
    #[route("/contacts")]
    Contacts {},
    #[route("/reviews")]
    Reviews {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8",
            LoginPage {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        AuthenticatedLayout {
            DashboardPage {}
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        AuthenticatedLayout {
            DashboardPage {}
        }
    }
}

#[component]
pub fn Orders() -> Element {
    rsx! {
        AuthenticatedLayout {
            OrdersPage {}
        }
    }
}

#[component]
pub fn Contacts() -> Element {
    rsx! {
        AuthenticatedLayout {
            ContactsPage {}
        }
    }
}

#[component]
pub fn Reviews() -> Element {
    rsx! {
        AuthenticatedLayout {
            ReviewsPage {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50",
            NotFoundPage { path: path }
        }
    }
}

#[component]
pub fn AuthenticatedLayout(children: Element) -> Element {
    let app_state = use_app_state();
    let navigator = use_navigator();

    if !app_state.booted {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-50",
                div { class: "animate-spin rounded-full h-16 w-16 border-b-2 border-blue-600" }
            }
        };
    }

    if app_state.is_authenticated() {
        rsx! {
            Layout {
                {children}
            }
        }
    } else {
        navigator.push(Route::Login {});
        rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-50",
                div { class: "animate-spin rounded-full h-32 w-32 border-b-2 border-blue-600" }
                p { class: "mt-4 text-gray-600", "Redirecting to login..." }
            }
        }
    }
}

pub mod nav {
    use super::*;

    pub fn is_active_route(current: &Route, target: &Route) -> bool {
        std::mem::discriminant(current) == std::mem::discriminant(target)
    }

    pub fn route_title(route: &Route) -> &'static str {
        match route {
            Route::Login { .. } => "Login",
            Route::Home { .. } => "Home",
            Route::Dashboard { .. } => "Dashboard",
            Route::Orders { .. } => "Orders",
            Route::Contacts { .. } => "Contacts",
            Route::Reviews { .. } => "Reviews",
            Route::NotFound { .. } => "Not Found",
        }
    }

    pub fn route_icon(route: &Route) -> &'static str {
        match route {
            Route::Login { .. } => "🔐",
            Route::Home { .. } => "🏠",
            Route::Dashboard { .. } => "📊",
            Route::Orders { .. } => "📦",
            Route::Contacts { .. } => "✉️",
            Route::Reviews { .. } => "⭐",
            Route::NotFound { .. } => "❓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_equality() {
        assert_eq!(Route::Orders {}, Route::Orders {});
        assert_ne!(
            std::mem::discriminant(&Route::Orders {}),
            std::mem::discriminant(&Route::Reviews {})
        );
    }

    #[test]
    fn test_route_title() {
        assert_eq!(nav::route_title(&Route::Orders {}), "Orders");
        assert_eq!(nav::route_title(&Route::Contacts {}), "Contacts");
        assert_eq!(nav::route_title(&Route::Reviews {}), "Reviews");
    }

    #[test]
    fn test_active_route_ignores_fields() {
        let current = Route::NotFound {
            segments: vec!["a".to_string()],
        };
        let target = Route::NotFound { segments: vec![] };
        assert!(nav::is_active_route(&current, &target));
    }
}
