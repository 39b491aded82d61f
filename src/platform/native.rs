// src/platform/native.rs - Desktop implementations backed by reqwest and a session file

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::platform::{
    NetworkProvider, NetworkRequest, NetworkResponse, PlatformProviders, SessionStorageProvider,
};

/// Creates desktop platform providers
pub fn create_providers() -> PlatformProviders {
    PlatformProviders {
        network: Arc::new(ReqwestNetwork::new()),
        session: Arc::new(FileSession::at_default_path()),
    }
}

/// HTTP transport over a shared reqwest client
pub struct ReqwestNetwork {
    client: reqwest::Client,
}

impl ReqwestNetwork {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestNetwork {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkProvider for ReqwestNetwork {
    async fn request(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| Error::network(&request.url, format!("Invalid method: {}", e)))?;

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::network(&request.url, e.to_string()).caused_by(e))?;

        let status_code = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(&request.url, e.to_string()).caused_by(e))?
            .to_vec();

        Ok(NetworkResponse { status_code, body })
    }
}

/// Session storage persisted as a JSON map on disk, mirroring what the
/// browser build keeps in localStorage
pub struct FileSession {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileSession {
    pub fn at_default_path() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("storefront-admin")
            .join("session.json");
        Self::with_path(path)
    }

    pub fn with_path(path: PathBuf) -> Self {
        let cache = Self::load(&path).unwrap_or_default();
        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    fn load(path: &PathBuf) -> Option<HashMap<String, String>> {
        let contents = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&*self.cache.read())?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[async_trait]
impl SessionStorageProvider for FileSession {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.cache.write().insert(key.to_string(), value.to_string());
        self.persist()
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.cache.write().remove(key);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::keys;

    #[tokio::test]
    async fn test_file_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = FileSession::with_path(path.clone());
        session.set(keys::AUTH_TOKEN, "abc123").await.unwrap();
        assert_eq!(
            session.get(keys::AUTH_TOKEN).await.unwrap().as_deref(),
            Some("abc123")
        );

        // A fresh instance reads the persisted file
        let reloaded = FileSession::with_path(path);
        assert_eq!(
            reloaded.get(keys::AUTH_TOKEN).await.unwrap().as_deref(),
            Some("abc123")
        );

        reloaded.remove(keys::AUTH_TOKEN).await.unwrap();
        assert_eq!(reloaded.get(keys::AUTH_TOKEN).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let session = FileSession::with_path(dir.path().join("session.json"));
        assert_eq!(session.get("unknown").await.unwrap(), None);
    }
}
