// src/ui/app.rs - Main application component with routing

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::config::AppConfig;
use crate::ui::{router::Route, state::AppStateProvider};

/// Main application component that sets up configuration, global state,
/// and routing
#[component]
pub fn App() -> Element {
    // Desktop launches inject an AppConfig context; the web build falls
    // back to compiled defaults (same-origin backend).
    let config = try_consume_context::<AppConfig>().unwrap_or_default();
    use_context_provider(|| config);

    rsx! {
        AppStateProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_component_renders() {
        let mut vdom = VirtualDom::new(App);
        let _ = vdom.rebuild_in_place();
    }
}
