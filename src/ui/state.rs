// src/ui/state.rs - Application state management and context

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::model::AdminUser;
use crate::platform::{self, keys};

/// Authenticated admin session: the bearer token plus the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: AdminUser,
}

/// Application state context provided to all components
#[derive(Debug, Clone, PartialEq)]
pub struct AppStateContext {
    pub session: Option<AuthSession>,
    /// False until persisted session state has been read back on startup.
    pub booted: bool,
}

impl Default for AppStateContext {
    fn default() -> Self {
        Self {
            session: None,
            booted: false,
        }
    }
}

impl AppStateContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}

/// Actions that can be performed on the application state
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Install a session and persist it under the client storage keys.
    SetSession(AuthSession),
    /// Drop the session and clear persisted state.
    ClearSession,
    SetBooted,
}

/// Application state provider component
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let mut session = use_signal(|| None::<AuthSession>);
    let mut booted = use_signal(|| false);

    let get_state = use_callback(move |_: ()| AppStateContext {
        session: session(),
        booted: booted(),
    });

    let dispatch = use_callback(move |action: AppAction| match action {
        AppAction::SetSession(new_session) => {
            session.set(Some(new_session.clone()));
            spawn(async move {
                if let Err(e) = persist_session(&new_session).await {
                    tracing::warn!(error = %e, "failed to persist session");
                }
            });
        }
        AppAction::ClearSession => {
            session.set(None);
            spawn(async move {
                if let Err(e) = clear_persisted_session().await {
                    tracing::warn!(error = %e, "failed to clear persisted session");
                }
            });
        }
        AppAction::SetBooted => booted.set(true),
    });

    use_context_provider(|| get_state);
    use_context_provider(|| dispatch);

    // Hydrate the persisted session once on startup
    use_future(move || async move {
        match restore_session().await {
            Ok(Some(restored)) => session.set(Some(restored)),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "failed to restore session"),
        }
        booted.set(true);
    });

    rsx! {
        {children}
    }
}

/// Hook to access the current application state
pub fn use_app_state() -> AppStateContext {
    let get_state = use_context::<Callback<(), AppStateContext>>();
    get_state(())
}

/// Hook to dispatch actions to the application state
pub fn use_app_dispatch() -> Callback<AppAction> {
    use_context::<Callback<AppAction>>()
}

/// Hook building an API client from injected configuration and the current
/// session token. Pages never read storage directly.
pub fn use_api() -> ApiClient {
    let config = use_context::<AppConfig>();
    let state = use_app_state();
    ApiClient::new(config.api_base_url, state.auth_token())
}

async fn persist_session(session: &AuthSession) -> crate::error::Result<()> {
    let store = platform::session();
    store.set(keys::AUTH_TOKEN, &session.token).await?;
    store
        .set(keys::ADMIN_USER, &serde_json::to_string(&session.user)?)
        .await?;
    store.set(keys::LOGIN_FLAG, "true").await?;
    Ok(())
}

async fn clear_persisted_session() -> crate::error::Result<()> {
    let store = platform::session();
    store.remove(keys::AUTH_TOKEN).await?;
    store.remove(keys::ADMIN_USER).await?;
    store.remove(keys::LOGIN_FLAG).await?;
    Ok(())
}

async fn restore_session() -> crate::error::Result<Option<AuthSession>> {
    let store = platform::session();
    let token = match store.get(keys::AUTH_TOKEN).await? {
        Some(token) if !token.is_empty() => token,
        _ => return Ok(None),
    };
    let user = match store.get(keys::ADMIN_USER).await? {
        Some(raw) => serde_json::from_str::<AdminUser>(&raw)?,
        None => return Ok(None),
    };
    Ok(Some(AuthSession { token, user }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_state() {
        let state = AppStateContext::default();
        assert!(state.session.is_none());
        assert!(!state.booted);
        assert!(!state.is_authenticated());
        assert!(state.auth_token().is_none());
    }

    #[test]
    fn test_auth_token_comes_from_session() {
        let state = AppStateContext {
            session: Some(AuthSession {
                token: "tok-1".to_string(),
                user: AdminUser {
                    id: "u1".to_string(),
                    name: "Admin".to_string(),
                    email: "admin@example.com".to_string(),
                    role: "admin".to_string(),
                },
            }),
            booted: true,
        };
        assert!(state.is_authenticated());
        assert_eq!(state.auth_token().as_deref(), Some("tok-1"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_restore_session_requires_both_keys() {
        // A token without a stored user is treated as no session
        let store = platform::session();
        let _ = store.remove(keys::ADMIN_USER).await;
        let _ = store.set(keys::AUTH_TOKEN, "lonely-token").await;
        let restored = restore_session().await.unwrap();
        assert!(restored.is_none());
        let _ = store.remove(keys::AUTH_TOKEN).await;
    }
}
