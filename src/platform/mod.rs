// src/platform/mod.rs - Platform abstraction for networking and session storage

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Keys under which the auth collaborator persists client-visible state.
pub mod keys {
    pub const AUTH_TOKEN: &str = "authToken";
    pub const ADMIN_USER: &str = "adminUser";
    pub const LOGIN_FLAG: &str = "isAdminLoggedIn";
}

/// Network request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

/// Network response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}

#[cfg(not(target_arch = "wasm32"))]
pub type DynNetwork = dyn NetworkProvider + Send + Sync;
#[cfg(target_arch = "wasm32")]
pub type DynNetwork = dyn NetworkProvider + Sync;

pub type NetworkArc = Arc<DynNetwork>;

#[cfg(not(target_arch = "wasm32"))]
pub type DynSession = dyn SessionStorageProvider + Send + Sync;
#[cfg(target_arch = "wasm32")]
pub type DynSession = dyn SessionStorageProvider + Sync;

pub type SessionArc = Arc<DynSession>;

/// HTTP transport
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait NetworkProvider: PlatformBounds {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse>;
}

/// Persistent key-value session storage (browser localStorage on web,
/// a session file on desktop)
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait SessionStorageProvider: PlatformBounds {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformBounds: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> PlatformBounds for T {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformBounds: Sync {}
#[cfg(target_arch = "wasm32")]
impl<T: Sync> PlatformBounds for T {}

/// Providers for the current platform
pub struct PlatformProviders {
    pub network: NetworkArc,
    pub session: SessionArc,
}

#[cfg(not(target_arch = "wasm32"))]
static PROVIDERS: once_cell::sync::Lazy<PlatformProviders> =
    once_cell::sync::Lazy::new(native::create_providers);

#[cfg(not(target_arch = "wasm32"))]
pub fn network() -> NetworkArc {
    PROVIDERS.network.clone()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session() -> SessionArc {
    PROVIDERS.session.clone()
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static PROVIDERS: PlatformProviders = web::create_providers();
}

#[cfg(target_arch = "wasm32")]
pub fn network() -> NetworkArc {
    PROVIDERS.with(|p| p.network.clone())
}

#[cfg(target_arch = "wasm32")]
pub fn session() -> SessionArc {
    PROVIDERS.with(|p| p.session.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_keys_match_backend_contract() {
        assert_eq!(keys::AUTH_TOKEN, "authToken");
        assert_eq!(keys::ADMIN_USER, "adminUser");
        assert_eq!(keys::LOGIN_FLAG, "isAdminLoggedIn");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_providers_are_constructible() {
        let _network = network();
        let _session = session();
    }
}
