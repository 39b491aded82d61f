// src/platform/web.rs - Web/WASM implementations over fetch and localStorage

use std::sync::Arc;

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Storage};

use crate::error::{Error, Result};
use crate::platform::{
    NetworkProvider, NetworkRequest, NetworkResponse, PlatformProviders, SessionStorageProvider,
};

/// Creates web platform providers
pub fn create_providers() -> PlatformProviders {
    PlatformProviders {
        network: Arc::new(FetchNetwork::new()),
        session: Arc::new(LocalStorageSession::new()),
    }
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| Error::platform("web", "window", "No window object"))
}

/// Fetch API network implementation
pub struct FetchNetwork;

impl FetchNetwork {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FetchNetwork {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl NetworkProvider for FetchNetwork {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        let window = window()?;

        let opts = RequestInit::new();
        opts.set_method(&request.method);
        if let Some(body) = request.body {
            let uint8_array = js_sys::Uint8Array::from(&body[..]);
            opts.set_body(&uint8_array);
        }

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(|e| {
            Error::network(&request.url, format!("Failed to create request: {:?}", e))
        })?;

        for (key, value) in &request.headers {
            req.headers().set(key, value).map_err(|e| {
                Error::network(&request.url, format!("Failed to set header: {:?}", e))
            })?;
        }

        let response_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| Error::network(&request.url, format!("Fetch failed: {:?}", e)))?;

        let response: Response = response_value
            .dyn_into()
            .map_err(|_| Error::network(&request.url, "Fetch returned a non-Response value"))?;
        let status_code = response.status();

        let buffer = response
            .array_buffer()
            .map_err(|e| Error::network(&request.url, format!("No response body: {:?}", e)))?;
        let body = JsFuture::from(buffer)
            .await
            .map_err(|e| Error::network(&request.url, format!("Failed to read body: {:?}", e)))?;
        let uint8_array = js_sys::Uint8Array::new(&body);

        Ok(NetworkResponse {
            status_code,
            body: uint8_array.to_vec(),
        })
    }
}

/// Session storage over browser localStorage
pub struct LocalStorageSession;

impl LocalStorageSession {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage> {
        window()?
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| Error::platform("web", "storage", "localStorage not available"))
    }
}

impl Default for LocalStorageSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SessionStorageProvider for LocalStorageSession {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::platform("web", "storage", format!("Failed to get item: {:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::platform("web", "storage", format!("Failed to set item: {:?}", e)))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(|e| {
            Error::platform("web", "storage", format!("Failed to remove item: {:?}", e))
        })
    }
}
