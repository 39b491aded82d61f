// src/api/mod.rs - REST client for the storefront admin backend

pub mod query;

pub use query::{page_after_delete, FetchTicket, ListQuery, QueryPairs, ALL_SENTINEL};

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    AdminUser, ContactListData, ContactPriority, ContactStatus, DashboardSnapshot, OrderListData,
    OrderStatus, ReviewListData,
};
use crate::platform::{self, NetworkRequest};

/// Every backend response arrives in this envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `PUT /api/contact/admin/{id}/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    pub status: ContactStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<ContactPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    pub user: AdminUser,
}

/// Filter values the review approval filter accepts besides `"all"`.
const REVIEW_STATUS_FILTERS: [&str; 2] = ["approved", "pending"];

fn order_status_filters() -> Vec<&'static str> {
    OrderStatus::ALL.iter().map(|s| s.as_str()).collect()
}

fn contact_status_filters() -> Vec<&'static str> {
    ContactStatus::ALL.iter().map(|s| s.as_str()).collect()
}

fn contact_priority_filters() -> Vec<&'static str> {
    ContactPriority::ALL.iter().map(|s| s.as_str()).collect()
}

fn reviews_list_path(query: &ListQuery) -> String {
    let mut pairs = query.pairs();
    pairs.push_if_allowed("status", &query.status, &REVIEW_STATUS_FILTERS);
    format!("/api/reviews/admin/all?{}", pairs.encode())
}

fn contacts_list_path(query: &ListQuery) -> String {
    let mut pairs = query.pairs();
    pairs.push_if_allowed("status", &query.status, &contact_status_filters());
    pairs.push_if_allowed("priority", &query.priority, &contact_priority_filters());
    format!("/api/contact/admin?{}", pairs.encode())
}

fn orders_list_path(query: &ListQuery) -> String {
    let mut pairs = query.pairs();
    pairs.push_if_allowed("status", &query.status, &order_status_filters());
    format!("/api/admin/orders?{}", pairs.encode())
}

/// Client for the admin REST API. Built per call site from configuration and
/// the session token held in application state, never from ad hoc storage
/// reads, so any component (or test) controls exactly what it talks with.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { token, base_url }
    }

    fn require_token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(Error::authentication("No admin token in session").source("api_client")),
        }
    }

    async fn execute(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiEnvelope<serde_json::Value>> {
        let url = format!("{}{}", self.base_url, path);
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(token) = token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        let body = match body {
            Some(value) => {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                Some(serde_json::to_vec(&value)?)
            }
            None => None,
        };

        tracing::debug!(method, path, "admin api request");

        let response = platform::network()
            .request(NetworkRequest {
                method: method.to_string(),
                url,
                headers,
                body,
            })
            .await?;

        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_slice(&response.body)
            .map_err(|e| {
                if (200..300).contains(&response.status_code) {
                    Error::from(e)
                } else {
                    Error::http_status(path, response.status_code)
                }
            })?;

        if !envelope.success {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| "Request failed".to_string());
            tracing::warn!(path, %message, "admin api rejected request");
            return Err(Error::api(path, message));
        }
        Ok(envelope)
    }

    /// Authenticated request expecting a typed `data` payload.
    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let token = self.require_token()?.to_string();
        let envelope = self.execute(method, path, Some(&token), body).await?;
        let data = envelope
            .data
            .ok_or_else(|| Error::api(path, "Response envelope missing data"))?;
        Ok(serde_json::from_value(data)?)
    }

    /// Authenticated request where only the success flag matters.
    async fn send_unit(
        &self,
        method: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        let token = self.require_token()?.to_string();
        self.execute(method, path, Some(&token), body).await?;
        Ok(())
    }

    /// Exchanges credentials for a bearer token. The only unauthenticated call.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData> {
        let path = "/api/admin/login";
        let body = serde_json::json!({ "email": email, "password": password });
        let envelope = self.execute("POST", path, None, Some(body)).await?;
        let data = envelope
            .data
            .ok_or_else(|| Error::api(path, "Login response missing data"))?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn list_reviews(&self, query: &ListQuery) -> Result<ReviewListData> {
        self.send("GET", &reviews_list_path(query), None).await
    }

    pub async fn set_review_approval(&self, id: &str, is_approved: bool) -> Result<()> {
        let path = format!("/api/reviews/admin/{}/approval", id);
        let body = serde_json::json!({ "isApproved": is_approved });
        self.send_unit("PUT", &path, Some(body)).await
    }

    pub async fn delete_review(&self, id: &str) -> Result<()> {
        let path = format!("/api/reviews/admin/{}", id);
        self.send_unit("DELETE", &path, None).await
    }

    pub async fn list_contacts(&self, query: &ListQuery) -> Result<ContactListData> {
        self.send("GET", &contacts_list_path(query), None).await
    }

    pub async fn update_contact(&self, id: &str, update: &ContactUpdate) -> Result<()> {
        let path = format!("/api/contact/admin/{}/status", id);
        let body = serde_json::to_value(update)?;
        self.send_unit("PUT", &path, Some(body)).await
    }

    pub async fn list_orders(&self, query: &ListQuery) -> Result<OrderListData> {
        self.send("GET", &orders_list_path(query), None).await
    }

    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
        note: &str,
    ) -> Result<()> {
        let path = format!("/api/admin/orders/{}/status", id);
        let body = serde_json::json!({ "orderStatus": status, "note": note });
        self.send_unit("PUT", &path, Some(body)).await
    }

    pub async fn delete_order(&self, id: &str) -> Result<()> {
        let path = format!("/api/admin/orders/{}", id);
        self.send_unit("DELETE", &path, None).await
    }

    pub async fn dashboard(&self) -> Result<DashboardSnapshot> {
        self.send("GET", "/api/analytics/dashboard", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviews_path_with_pending_filter() {
        let query = ListQuery::default().with_status("pending");
        assert_eq!(
            reviews_list_path(&query),
            "/api/reviews/admin/all?page=1&limit=10&status=pending"
        );
    }

    #[test]
    fn test_reviews_path_omits_all_sentinel() {
        let query = ListQuery::default();
        assert_eq!(reviews_list_path(&query), "/api/reviews/admin/all?page=1&limit=10");
    }

    #[test]
    fn test_contacts_path_carries_every_set_filter() {
        let query = ListQuery::default()
            .with_search("refund")
            .with_status("new")
            .with_priority("high");
        assert_eq!(
            contacts_list_path(&query),
            "/api/contact/admin?page=1&limit=10&search=refund&status=new&priority=high"
        );
    }

    #[test]
    fn test_orders_path_drops_unknown_status() {
        let query = ListQuery::default().with_status("approved");
        // "approved" is a review filter, not an order status
        assert_eq!(orders_list_path(&query), "/api/admin/orders?page=1&limit=10");
    }

    #[test]
    fn test_missing_token_fails_before_any_request() {
        let client = ApiClient::new("http://localhost:5000", None);
        let error = client.require_token().unwrap_err();
        assert!(error.is_authentication());
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/", Some("t".to_string()));
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_envelope_failure_carries_message() {
        let json = r#"{"success": false, "message": "Order not found"}"#;
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Order not found"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_contact_update_skips_unset_fields() {
        let update = ContactUpdate {
            status: ContactStatus::Read,
            priority: None,
            admin_notes: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"status":"read"}"#);

        let full = ContactUpdate {
            status: ContactStatus::Replied,
            priority: Some(ContactPriority::High),
            admin_notes: Some("Called the customer".to_string()),
        };
        let json = serde_json::to_value(&full).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["adminNotes"], "Called the customer");
    }
}
