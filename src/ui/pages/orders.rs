// src/ui/pages/orders.rs - Order management list and detail modal

use dioxus::prelude::*;

use crate::api::{page_after_delete, FetchTicket, ListQuery, ALL_SENTINEL};
use crate::model::{Order, OrderListData, OrderStatus};
use crate::ui::pages::{DetailModal, EmptyState, ErrorBanner, PageWrapper, Pager, StatCard};
use crate::ui::state::use_api;
use crate::utils::{format_date, format_discount, format_usd};

/// The discount row in the totals block only exists for a real discount.
pub fn shows_discount_row(discount: f64) -> bool {
    discount > 0.0
}

#[component]
pub fn Orders() -> Element {
    let api = use_api();
    let config = use_context::<crate::config::AppConfig>();

    let mut query = use_signal(move || ListQuery {
        limit: config.page_size,
        ..ListQuery::default()
    });
    let mut data = use_signal(|| None::<OrderListData>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let ticket = use_hook(FetchTicket::new);

    let mut search_input = use_signal(String::new);
    let mut selected = use_signal(|| None::<Order>);
    let mut pending_status = use_signal(|| None::<OrderStatus>);
    let mut status_note = use_signal(String::new);
    let mut confirm_delete = use_signal(|| None::<String>);
    let mut mutating = use_signal(|| false);

    // Refetch whenever the query state changes. Stale responses are dropped
    // by the ticket check, so whatever lands in `data` always matches the
    // newest query.
    use_effect({
        let api = api.clone();
        let ticket = ticket.clone();
        move || {
            let q = query();
            let api = api.clone();
            let ticket = ticket.clone();
            let issued = ticket.issue();
            loading.set(true);
            spawn(async move {
                let result = api.list_orders(&q).await;
                if !ticket.is_current(issued) {
                    return;
                }
                match result {
                    Ok(list) => {
                        data.set(Some(list));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "order list fetch failed");
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
        }
    });

    let on_search = move |e: FormEvent| {
        e.prevent_default();
        let next = query.peek().with_search(search_input.peek().clone());
        query.set(next);
    };

    let on_status_filter = move |e: FormEvent| {
        let next = query.peek().with_status(e.value());
        query.set(next);
    };

    let on_page = move |page: u32| {
        let next = query.peek().with_page(page);
        query.set(next);
    };

    let open_order = move |order: Order| {
        pending_status.set(Some(order.order_status));
        status_note.set(String::new());
        selected.set(Some(order));
    };

    let update_status = {
        let api = api.clone();
        move |_: ()| {
            let Some(order) = selected.peek().clone() else {
                return;
            };
            let Some(status) = *pending_status.peek() else {
                return;
            };
            let api = api.clone();
            let note = status_note.peek().clone();
            mutating.set(true);
            spawn(async move {
                match api.update_order_status(&order.id, status, &note).await {
                    Ok(()) => {
                        selected.set(None);
                        // Same query again; the list reflects the change
                        let same = query.peek().clone();
                        query.set(same);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, order_id = %order.id, "order status update failed");
                        error.set(Some(e.user_message()));
                    }
                }
                mutating.set(false);
            });
        }
    };

    let delete_order = {
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            let items_on_page = data
                .peek()
                .as_ref()
                .map(|d| d.orders.len())
                .unwrap_or_default();
            mutating.set(true);
            spawn(async move {
                match api.delete_order(&id).await {
                    Ok(()) => {
                        confirm_delete.set(None);
                        selected.set(None);
                        let next = page_after_delete(query.peek().page, items_on_page);
                        let next_query = query.peek().with_page(next);
                        query.set(next_query);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, order_id = %id, "order delete failed");
                        error.set(Some(e.user_message()));
                    }
                }
                mutating.set(false);
            });
        }
    };

    let current = data();
    let status_value = query().status;

    rsx! {
        PageWrapper {
            title: "Orders".to_string(),
            subtitle: Some("Track and manage customer orders".to_string()),

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if let Some(list) = current.as_ref() {
                div {
                    class: "grid grid-cols-1 gap-5 sm:grid-cols-2",
                    StatCard {
                        title: "Total Orders".to_string(),
                        value: list.stats.total_orders.to_string(),
                        icon: Some("📦".to_string())
                    }
                    StatCard {
                        title: "Total Revenue".to_string(),
                        value: format_usd(list.stats.total_revenue),
                        icon: Some("💰".to_string())
                    }
                }
            }

            // Search and status filter
            div {
                class: "bg-white shadow rounded-lg p-4 flex flex-col sm:flex-row gap-4",
                form {
                    class: "flex-1 flex gap-2",
                    onsubmit: on_search,
                    input {
                        r#type: "search",
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                        placeholder: "Search by order number or customer...",
                        value: "{search_input}",
                        oninput: move |e| search_input.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700",
                        "Search"
                    }
                }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                    value: "{status_value}",
                    onchange: on_status_filter,
                    option { value: "{ALL_SENTINEL}", "All Statuses" }
                    for status in OrderStatus::ALL {
                        option { value: "{status.as_str()}", "{status.label()}" }
                    }
                }
            }

            if loading() && current.is_none() {
                div {
                    class: "flex items-center justify-center py-24",
                    div { class: "animate-spin rounded-full h-16 w-16 border-b-2 border-blue-600" }
                }
            } else if let Some(list) = current {
                if list.orders.is_empty() {
                    EmptyState {
                        icon: "📦".to_string(),
                        title: "No orders found".to_string(),
                        description: "No orders match the current search and filters.".to_string()
                    }
                } else {
                    div {
                        class: "bg-white shadow rounded-lg overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Order" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Customer" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Date" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Payment" }
                                    th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider", "Total" }
                                    th { class: "px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider", "Actions" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for order in list.orders.iter() {
                                    OrderRow {
                                        key: "{order.id}",
                                        order: order.clone(),
                                        confirming: confirm_delete() == Some(order.id.clone()),
                                        mutating: mutating(),
                                        on_open: {
                                            let mut open_order = open_order;
                                            move |order: Order| open_order(order)
                                        },
                                        on_arm_delete: move |id: String| confirm_delete.set(Some(id)),
                                        on_cancel_delete: move |_| confirm_delete.set(None),
                                        on_confirm_delete: {
                                            let delete_order = delete_order.clone();
                                            move |id: String| delete_order.clone()(id)
                                        },
                                    }
                                }
                            }
                        }
                    }

                    Pager {
                        pagination: list.pagination,
                        on_page: on_page
                    }
                }
            }

            if let Some(order) = selected() {
                DetailModal {
                    title: format!("Order {}", order.order_number),
                    on_close: move |_| selected.set(None),
                    OrderDetail {
                        order: order.clone(),
                        pending_status: pending_status,
                        status_note: status_note,
                        mutating: mutating(),
                        on_update: update_status.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(
    order: Order,
    confirming: bool,
    mutating: bool,
    on_open: EventHandler<Order>,
    on_arm_delete: EventHandler<String>,
    on_cancel_delete: EventHandler<()>,
    on_confirm_delete: EventHandler<String>,
) -> Element {
    let row_order = order.clone();
    let delete_id = order.id.clone();
    let confirm_id = order.id.clone();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 whitespace-nowrap",
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-blue-600 hover:text-blue-800",
                    onclick: move |_| on_open.call(row_order.clone()),
                    "{order.order_number}"
                }
            }
            td {
                class: "px-6 py-4 whitespace-nowrap",
                div { class: "text-sm text-gray-900", "{order.customer.name}" }
                div { class: "text-sm text-gray-500", "{order.customer.email}" }
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
                class: "px-6 py-4 whitespace-nowrap",
                span {
                    class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium {order.payment_status.badge_class()}",
                    "{order.payment_status.label()}"
                }
            }
            td {
                class: "px-6 py-4 whitespace-nowrap text-sm text-right font-medium text-gray-900",
                "{format_usd(order.total)}"
            }
            td {
                class: "px-6 py-4 whitespace-nowrap text-right text-sm",
                if confirming {
                    span {
                        class: "space-x-2",
                        button {
                            r#type: "button",
                            disabled: mutating,
                            class: "text-red-600 hover:text-red-800 font-medium disabled:opacity-50",
                            onclick: move |_| on_confirm_delete.call(confirm_id.clone()),
                            "Confirm"
                        }
                        button {
                            r#type: "button",
                            class: "text-gray-500 hover:text-gray-700",
                            onclick: move |_| on_cancel_delete.call(()),
                            "Cancel"
                        }
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "text-red-600 hover:text-red-800",
                        onclick: move |_| on_arm_delete.call(delete_id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn OrderDetail(
    order: Order,
    pending_status: Signal<Option<OrderStatus>>,
    status_note: Signal<String>,
    mutating: bool,
    on_update: EventHandler<()>,
) -> Element {
    let selected_status = pending_status().unwrap_or(order.order_status);

    rsx! {
        div {
            class: "space-y-6",

            // Customer and shipping
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-6",
                div {
                    h4 { class: "text-sm font-medium text-gray-500 uppercase tracking-wider mb-2", "Customer" }
                    p { class: "text-sm text-gray-900", "{order.customer.name}" }
                    p { class: "text-sm text-gray-500", "{order.customer.email}" }
                }
                div {
                    h4 { class: "text-sm font-medium text-gray-500 uppercase tracking-wider mb-2", "Shipping Address" }
                    p { class: "text-sm text-gray-900", "{order.shipping_address.name}" }
                    p { class: "text-sm text-gray-500", "{order.shipping_address.street}" }
                    p {
                        class: "text-sm text-gray-500",
                        "{order.shipping_address.city}, {order.shipping_address.state} {order.shipping_address.zip}"
                    }
                    p { class: "text-sm text-gray-500", "{order.shipping_address.country}" }
                    if let Some(phone) = order.shipping_address.phone.as_ref() {
                        p { class: "text-sm text-gray-500", "{phone}" }
                    }
                }
            }

            // Line items
            div {
                h4 { class: "text-sm font-medium text-gray-500 uppercase tracking-wider mb-2", "Items" }
                table {
                    class: "min-w-full divide-y divide-gray-200",
                    tbody {
                        class: "divide-y divide-gray-100",
                        for (i, item) in order.items.iter().enumerate() {
                            tr {
                                key: "{i}",
                                td { class: "py-2 text-sm text-gray-900", "{item.product_name}" }
                                td { class: "py-2 text-sm text-gray-500 text-center", "× {item.quantity}" }
                                td {
                                    class: "py-2 text-sm text-gray-900 text-right",
                                    "{format_usd(item.price * item.quantity as f64)}"
                                }
                            }
                        }
                    }
                }
            }

            // Totals
            div {
                class: "border-t border-gray-200 pt-4 space-y-1",
                TotalsRow { label: "Subtotal".to_string(), value: format_usd(order.subtotal) }
                TotalsRow { label: "Shipping".to_string(), value: format_usd(order.shipping_cost) }
                TotalsRow { label: "Tax".to_string(), value: format_usd(order.tax) }
                if shows_discount_row(order.discount) {
                    div {
                        class: "flex justify-between text-sm text-green-600",
                        span { "Discount" }
                        span { "{format_discount(order.discount)}" }
                    }
                }
                div {
                    class: "flex justify-between text-base font-semibold text-gray-900 pt-2",
                    span { "Total" }
                    span { "{format_usd(order.total)}" }
                }
            }

            // Payment summary
            div {
                class: "flex items-center justify-between border-t border-gray-200 pt-4",
                span { class: "text-sm text-gray-500", "Payment: {order.payment_method}" }
                span {
                    class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium {order.payment_status.badge_class()}",
                    "{order.payment_status.label()}"
                }
            }

            // Status update
            div {
                class: "border-t border-gray-200 pt-4 space-y-3",
                h4 { class: "text-sm font-medium text-gray-500 uppercase tracking-wider", "Update Status" }
                select {
                    class: "block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                    value: "{selected_status.as_str()}",
                    onchange: move |e: FormEvent| {
                        if let Some(status) = OrderStatus::ALL.iter().find(|s| s.as_str() == e.value()) {
                            pending_status.set(Some(*status));
                        }
                    },
                    for status in OrderStatus::ALL {
                        option {
                            value: "{status.as_str()}",
                            selected: status == selected_status,
                            "{status.label()}"
                        }
                    }
                }
                textarea {
                    class: "block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                    rows: 2,
                    placeholder: "Note for the status history (optional)",
                    value: "{status_note}",
                    oninput: move |e| status_note.set(e.value()),
                }
                button {
                    r#type: "button",
                    disabled: mutating,
                    class: "w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed",
                    onclick: move |_| on_update.call(()),
                    if mutating { "Updating..." } else { "Update Order" }
                }
            }
        }
    }
}

#[component]
fn TotalsRow(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between text-sm text-gray-600",
            span { "{label}" }
            span { "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_row_only_for_positive_discount() {
        assert!(!shows_discount_row(0.0));
        assert!(!shows_discount_row(-2.0));
        assert!(shows_discount_row(5.0));
    }

    #[test]
    fn test_discount_row_renders_negative_amount() {
        assert!(shows_discount_row(5.0));
        assert_eq!(format_discount(5.0), "-$5.00");
    }
}
