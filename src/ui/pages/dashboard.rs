// src/ui/pages/dashboard.rs - Analytics overview page

use dioxus::prelude::*;

use crate::error::Error;
use crate::model::DashboardSnapshot;
use crate::ui::pages::{PageError, PageWrapper, StatCard};
use crate::ui::state::use_api;
use crate::utils::{format_date, format_usd};

/// Tallest bar in the monthly revenue chart, in pixels.
const CHART_MAX_PX: f64 = 160.0;

/// Pixel height for one revenue bar, scaled against the largest month.
/// Non-zero revenue always gets a visible sliver.
pub fn bar_height(value: f64, max: f64) -> u32 {
    if value <= 0.0 || max <= 0.0 {
        return 0;
    }
    let scaled = (value / max * CHART_MAX_PX).round() as u32;
    scaled.max(2)
}

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();

    let mut snapshot = use_signal(|| None::<DashboardSnapshot>);
    let mut error = use_signal(|| None::<Error>);
    let mut loading = use_signal(|| true);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        // Subscribes to the reload counter so "Try Again" refetches
        let _ = reload();
        let api = api.clone();
        loading.set(true);
        spawn(async move {
            match api.dashboard().await {
                Ok(data) => {
                    snapshot.set(Some(data));
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "dashboard fetch failed");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    if loading() {
        return rsx! {
            div {
                class: "flex items-center justify-center py-24",
                div { class: "animate-spin rounded-full h-16 w-16 border-b-2 border-blue-600" }
            }
        };
    }

    if let Some(e) = error() {
        return rsx! {
            PageError {
                message: e.user_message(),
                retry_action: Some(Callback::new(move |_| reload.set(reload() + 1)))
            }
        };
    }

    let Some(data) = snapshot() else {
        return rsx! {
            PageError { message: "No analytics data available".to_string() }
        };
    };

    let max_revenue = data
        .monthly_revenue
        .iter()
        .map(|p| p.revenue)
        .fold(0.0_f64, f64::max);

    let mut status_rows: Vec<(String, u64)> = data
        .order_status_distribution
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    status_rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let status_total: u64 = status_rows.iter().map(|(_, n)| n).sum();

    rsx! {
        PageWrapper {
            title: "Dashboard".to_string(),
            subtitle: Some("Store performance at a glance".to_string()),

            // Overview counters
            div {
                class: "grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-3",
                StatCard {
                    title: "Total Orders".to_string(),
                    value: data.overview.total_orders.to_string(),
                    icon: Some("📦".to_string())
                }
                StatCard {
                    title: "Orders Today".to_string(),
                    value: data.overview.today_orders.to_string(),
                    icon: Some("🕒".to_string())
                }
                StatCard {
                    title: "Orders This Month".to_string(),
                    value: data.overview.monthly_orders.to_string(),
                    icon: Some("🗓️".to_string())
                }
                StatCard {
                    title: "Products".to_string(),
                    value: data.overview.total_products.to_string(),
                    icon: Some("🏷️".to_string())
                }
                StatCard {
                    title: "Customers".to_string(),
                    value: data.overview.total_customers.to_string(),
                    icon: Some("👥".to_string())
                }
                StatCard {
                    title: "Reviews".to_string(),
                    value: data.overview.total_reviews.to_string(),
                    icon: Some("⭐".to_string())
                }
            }

            // Sales aggregates
            div {
                class: "grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4",
                StatCard {
                    title: "Total Revenue".to_string(),
                    value: format_usd(data.sales.total_revenue),
                    icon: Some("💰".to_string())
                }
                StatCard {
                    title: "Revenue This Month".to_string(),
                    value: format_usd(data.sales.monthly_revenue),
                    icon: Some("📈".to_string())
                }
                StatCard {
                    title: "Revenue Today".to_string(),
                    value: format_usd(data.sales.today_revenue),
                    icon: Some("☀️".to_string())
                }
                StatCard {
                    title: "Avg Order Value".to_string(),
                    value: format_usd(data.sales.average_order_value),
                    icon: Some("🧾".to_string())
                }
            }

            div {
                class: "grid grid-cols-1 gap-6 lg:grid-cols-2",

                // Monthly revenue bar chart
                div {
                    class: "bg-white shadow rounded-lg p-6",
                    h3 {
                        class: "text-lg font-medium text-gray-900 mb-4",
                        "Monthly Revenue"
                    }
                    if data.monthly_revenue.is_empty() {
                        p { class: "text-sm text-gray-500", "No revenue recorded yet." }
                    } else {
                        div {
                            class: "flex items-end justify-between space-x-2 h-48",
                            for point in data.monthly_revenue.iter() {
                                div {
                                    key: "{point.month}",
                                    class: "flex-1 flex flex-col items-center justify-end",
                                    title: "{format_usd(point.revenue)}",
                                    div {
                                        class: "w-full bg-blue-500 rounded-t",
                                        style: "height: {bar_height(point.revenue, max_revenue)}px",
                                    }
                                    span {
                                        class: "mt-2 text-xs text-gray-500",
                                        "{point.month}"
                                    }
                                }
                            }
                        }
                    }
                }

                // Order status distribution
                div {
                    class: "bg-white shadow rounded-lg p-6",
                    h3 {
                        class: "text-lg font-medium text-gray-900 mb-4",
                        "Orders by Status"
                    }
                    if status_rows.is_empty() {
                        p { class: "text-sm text-gray-500", "No orders yet." }
                    } else {
                        div {
                            class: "space-y-3",
                            for (status, count) in status_rows.iter() {
                                div {
                                    key: "{status}",
                                    class: "flex items-center",
                                    span {
                                        class: "w-24 text-sm text-gray-600 capitalize",
                                        "{status}"
                                    }
                                    div {
                                        class: "flex-1 bg-gray-100 rounded-full h-2 mx-3",
                                        div {
                                            class: "bg-blue-500 h-2 rounded-full",
                                            style: "width: {percent_of(*count, status_total)}%",
                                        }
                                    }
                                    span {
                                        class: "text-sm font-medium text-gray-900",
                                        "{count}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Recent orders
            div {
                class: "bg-white shadow rounded-lg",
                div {
                    class: "px-6 py-4 border-b border-gray-200",
                    h3 {
                        class: "text-lg font-medium text-gray-900",
                        "Recent Orders"
                    }
                }
                if data.recent_orders.is_empty() {
                    p { class: "px-6 py-8 text-sm text-gray-500", "No orders yet." }
                } else {
                    table {
                        class: "min-w-full divide-y divide-gray-200",
                        thead {
                            class: "bg-gray-50",
                            tr {
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Order" }
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Customer" }
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Date" }
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Status" }
                                th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider", "Total" }
                            }
                        }
                        tbody {
                            class: "divide-y divide-gray-200",
                            for order in data.recent_orders.iter() {
                                tr {
                                    key: "{order.id}",
                                    td {
                                        class: "px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900",
                                        "{order.order_number}"
                                    }
                                    td {
                                        class: "px-6 py-4 whitespace-nowrap text-sm text-gray-500",
                                        "{order.customer_name}"
                                    }
                                    td {
                                        class: "px-6 py-4 whitespace-nowrap text-sm text-gray-500",
                                        "{format_date(order.created_at)}"
                                    }
                                    td {
                                        class: "px-6 py-4 whitespace-nowrap",
                                        span {
                                            class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium {order.order_status.badge_class()}",
                                            "{order.order_status.label()}"
                                        }
                                    }
                                    td {
                                        class: "px-6 py-4 whitespace-nowrap text-sm text-right font-medium text-gray-900",
                                        "{format_usd(order.total)}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Percentage for the status distribution bars, 0 when there are no orders.
fn percent_of(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scales_against_largest_month() {
        assert_eq!(bar_height(100.0, 100.0), 160);
        assert_eq!(bar_height(50.0, 100.0), 80);
        assert_eq!(bar_height(0.0, 100.0), 0);
    }

    #[test]
    fn test_bar_height_handles_degenerate_inputs() {
        assert_eq!(bar_height(10.0, 0.0), 0);
        assert_eq!(bar_height(-5.0, 100.0), 0);
        // Tiny but non-zero revenue still renders a visible bar
        assert_eq!(bar_height(0.01, 10000.0), 2);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1, 4), 25);
        assert_eq!(percent_of(0, 4), 0);
        assert_eq!(percent_of(3, 0), 0);
    }
}
