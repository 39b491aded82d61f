// src/ui/pages/login.rs - Admin login form

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    router::Route,
    state::{use_api, use_app_dispatch, use_app_state, AppAction, AuthSession},
};

/// Login page component
#[component]
pub fn Login() -> Element {
    let app_state = use_app_state();
    let dispatch = use_app_dispatch();
    let api = use_api();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already signed in: skip the form entirely
    if app_state.booted && app_state.is_authenticated() {
        navigator.push(Route::Dashboard {});
    }

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            error_message.set(Some("Email and password are required".to_string()));
            return;
        }

        submitting.set(true);
        error_message.set(None);

        let api = api.clone();
        let navigator = navigator;
        spawn(async move {
            match api.login(&email_value, &password_value).await {
                Ok(data) => {
                    tracing::info!(email = %data.user.email, "admin signed in");
                    dispatch(AppAction::SetSession(AuthSession {
                        token: data.token,
                        user: data.user,
                    }));
                    navigator.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    error_message.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "max-w-md w-full space-y-8",
            div {
                div {
                    class: "mx-auto h-12 w-12 flex items-center justify-center rounded-full bg-blue-100 text-2xl",
                    "🛍️"
                }
                h2 {
                    class: "mt-6 text-center text-3xl font-extrabold text-gray-900",
                    "Storefront Admin"
                }
                p {
                    class: "mt-2 text-center text-sm text-gray-600",
                    "Sign in to manage your store"
                }
            }

            form {
                class: "mt-8 space-y-6 bg-white p-8 rounded-lg shadow",
                onsubmit: handle_submit,

                if let Some(message) = error_message() {
                    div {
                        class: "bg-red-50 border-l-4 border-red-400 p-4 rounded-md",
                        p {
                            class: "text-sm text-red-700",
                            "{message}"
                        }
                    }
                }

                div {
                    label {
                        r#for: "email",
                        class: "block text-sm font-medium text-gray-700",
                        "Email address"
                    }
                    input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "email",
                        class: "mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                        placeholder: "admin@example.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div {
                    label {
                        r#for: "password",
                        class: "block text-sm font-medium text-gray-700",
                        "Password"
                    }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        class: "mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                button {
                    r#type: "submit",
                    disabled: submitting(),
                    class: "w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed",
                    if submitting() {
                        "Signing in..."
                    } else {
                        "Sign in"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_component_renders() {
        let mut vdom = VirtualDom::new(crate::ui::App);
        let _ = vdom.rebuild_in_place();
    }
}
