// src/model.rs - Backend DTOs passed through unchanged from the REST API

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status as the backend enumerates it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        Self::Pending,
        Self::Confirmed,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::Returned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Returned => "Returned",
        }
    }

    /// Badge styling for list rows and the detail modal
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::Confirmed => "bg-blue-100 text-blue-800",
            Self::Processing => "bg-indigo-100 text-indigo-800",
            Self::Shipped => "bg-purple-100 text-purple-800",
            Self::Delivered => "bg-green-100 text-green-800",
            Self::Cancelled => "bg-red-100 text-red-800",
            Self::Returned => "bg-gray-100 text-gray-800",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Notpaid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
            Self::Notpaid => "Not Paid",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Paid => "bg-green-100 text-green-800",
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::Failed => "bg-red-100 text-red-800",
            Self::Notpaid => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSnapshot {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub created_at: DateTime<Utc>,
    pub customer: CustomerSnapshot,
    pub shipping_address: ShippingAddress,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub shipping_cost: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
    Resolved,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [Self::New, Self::Read, Self::Replied, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Read => "Read",
            Self::Replied => "Replied",
            Self::Resolved => "Resolved",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::New => "bg-blue-100 text-blue-800",
            Self::Read => "bg-gray-100 text-gray-800",
            Self::Replied => "bg-indigo-100 text-indigo-800",
            Self::Resolved => "bg-green-100 text-green-800",
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPriority {
    Low,
    Medium,
    High,
}

impl ContactPriority {
    pub const ALL: [ContactPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Low => "bg-gray-100 text-gray-800",
            Self::Medium => "bg-yellow-100 text-yellow-800",
            Self::High => "bg-red-100 text-red-800",
        }
    }
}

impl std::fmt::Display for ContactPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: ContactStatus,
    pub priority: ContactPriority,
    #[serde(default)]
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author_name: String,
    pub author_email: String,
    pub product_name: String,
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub is_approved: bool,
    pub helpful_count: u32,
}

/// Pagination metadata returned alongside every list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            has_prev_page: false,
            has_next_page: false,
        }
    }
}

// Server-computed summary blocks, distinct from the list items themselves.

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    pub total: u64,
    pub new: u64,
    pub replied: u64,
    pub resolved: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total_orders: u64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListData {
    pub reviews: Vec<Review>,
    pub pagination: Pagination,
    pub stats: ReviewStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListData {
    pub contacts: Vec<Contact>,
    pub pagination: Pagination,
    pub stats: ContactStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListData {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
    pub stats: OrderStats,
}

// Dashboard analytics snapshot.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCounters {
    pub total_orders: u64,
    pub today_orders: u64,
    pub monthly_orders: u64,
    pub total_products: u64,
    pub total_customers: u64,
    pub total_reviews: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAggregates {
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub today_revenue: f64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenuePoint {
    pub month: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub total: f64,
    pub order_status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub overview: OverviewCounters,
    pub sales: SalesAggregates,
    pub monthly_revenue: Vec<MonthlyRevenuePoint>,
    pub recent_orders: Vec<RecentOrder>,
    pub order_status_distribution: HashMap<String, u64>,
}

/// Admin account persisted in session storage under `adminUser`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
        let parsed: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn test_payment_status_notpaid_spelling() {
        let parsed: PaymentStatus = serde_json::from_str("\"notpaid\"").unwrap();
        assert_eq!(parsed, PaymentStatus::Notpaid);
        assert_eq!(parsed.label(), "Not Paid");
    }

    #[test]
    fn test_contact_deserializes_camel_case() {
        let json = r#"{
            "id": "c1",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Late delivery",
            "message": "My order is a week late.",
            "createdAt": "2025-06-01T10:00:00Z",
            "status": "new",
            "priority": "high"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.status, ContactStatus::New);
        assert_eq!(contact.priority, ContactPriority::High);
        assert!(contact.phone.is_none());
        assert!(contact.admin_notes.is_none());
    }

    #[test]
    fn test_review_deserializes_approval_flag() {
        let json = r#"{
            "id": "r1",
            "authorName": "Sam",
            "authorEmail": "sam@example.com",
            "productName": "Espresso Grinder",
            "rating": 4,
            "title": "Solid",
            "comment": "Grinds evenly.",
            "createdAt": "2025-05-12T08:30:00Z",
            "isApproved": false,
            "helpfulCount": 3
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert!(!review.is_approved);
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn test_pagination_default_is_single_page() {
        let pagination = Pagination::default();
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.total_pages, 1);
        assert!(!pagination.has_prev_page);
        assert!(!pagination.has_next_page);
    }

    #[test]
    fn test_dashboard_snapshot_round_trip() {
        let json = r#"{
            "overview": {
                "totalOrders": 120, "todayOrders": 4, "monthlyOrders": 31,
                "totalProducts": 58, "totalCustomers": 240, "totalReviews": 87
            },
            "sales": {
                "totalRevenue": 15400.5, "monthlyRevenue": 2100.0,
                "todayRevenue": 180.0, "averageOrderValue": 128.33
            },
            "monthlyRevenue": [{"month": "Jan", "revenue": 900.0}],
            "recentOrders": [],
            "orderStatusDistribution": {"pending": 7, "shipped": 12}
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.overview.total_orders, 120);
        assert_eq!(snapshot.order_status_distribution["shipped"], 12);
    }
}
