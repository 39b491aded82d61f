// src/ui/pages/reviews.rs - Product review moderation

use dioxus::prelude::*;

use crate::api::{page_after_delete, FetchTicket, ListQuery, ALL_SENTINEL};
use crate::model::{Review, ReviewListData};
use crate::ui::pages::{EmptyState, ErrorBanner, PageWrapper, Pager, StatCard};
use crate::ui::state::use_api;
use crate::utils::{format_date, format_rating};

/// Filled and empty star counts for a rating, clamped to the 5-star scale.
pub fn star_counts(rating: u8) -> (u8, u8) {
    let filled = rating.min(5);
    (filled, 5 - filled)
}

fn stars(rating: u8) -> String {
    let (filled, empty) = star_counts(rating);
    let mut out = String::new();
    for _ in 0..filled {
        out.push('★');
    }
    for _ in 0..empty {
        out.push('☆');
    }
    out
}

#[component]
pub fn Reviews() -> Element {
    let api = use_api();
    let config = use_context::<crate::config::AppConfig>();

    let mut query = use_signal(move || ListQuery {
        limit: config.page_size,
        ..ListQuery::default()
    });
    let mut data = use_signal(|| None::<ReviewListData>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let ticket = use_hook(FetchTicket::new);

    let mut confirm_delete = use_signal(|| None::<String>);
    let mut mutating = use_signal(|| false);

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
                let result = api.list_reviews(&q).await;
                if !ticket.is_current(issued) {
                    return;
                }
                match result {
                    Ok(list) => {
                        data.set(Some(list));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "review list fetch failed");
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
        }
    });

    let toggle_approval = {
        let api = api.clone();
        move |(id, approve): (String, bool)| {
            let api = api.clone();
            mutating.set(true);
            spawn(async move {
                match api.set_review_approval(&id, approve).await {
                    Ok(()) => {
                        let same = query.peek().clone();
                        query.set(same);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, review_id = %id, "review approval update failed");
                        error.set(Some(e.user_message()));
                    }
                }
                mutating.set(false);
            });
        }
    };

    let delete_review = {
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            let items_on_page = data
                .peek()
                .as_ref()
                .map(|d| d.reviews.len())
                .unwrap_or_default();
            mutating.set(true);
            spawn(async move {
                match api.delete_review(&id).await {
                    Ok(()) => {
                        confirm_delete.set(None);
                        let next = page_after_delete(query.peek().page, items_on_page);
                        let next_query = query.peek().with_page(next);
                        query.set(next_query);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, review_id = %id, "review delete failed");
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
            title: "Reviews".to_string(),
            subtitle: Some("Moderate product reviews".to_string()),

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if let Some(list) = current.as_ref() {
                div {
                    class: "grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4",
                    StatCard {
                        title: "Total Reviews".to_string(),
                        value: list.stats.total.to_string(),
                        icon: Some("⭐".to_string())
                    }
                    StatCard {
                        title: "Approved".to_string(),
                        value: list.stats.approved.to_string(),
                        icon: Some("✅".to_string())
                    }
                    StatCard {
                        title: "Pending".to_string(),
                        value: list.stats.pending.to_string(),
                        icon: Some("⏳".to_string())
                    }
                    StatCard {
                        title: "Average Rating".to_string(),
                        value: format_rating(list.stats.average_rating),
                        icon: Some("📊".to_string())
                    }
                }
            }

            // Approval filter
            div {
                class: "bg-white shadow rounded-lg p-4 flex justify-end",
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                    value: "{status_value}",
                    onchange: move |e: FormEvent| {
                        let next = query.peek().with_status(e.value());
                        query.set(next);
                    },
                    option { value: "{ALL_SENTINEL}", "All Reviews" }
                    option { value: "approved", "Approved" }
                    option { value: "pending", "Pending" }
                }
            }

            if loading() && current.is_none() {
                div {
                    class: "flex items-center justify-center py-24",
                    div { class: "animate-spin rounded-full h-16 w-16 border-b-2 border-blue-600" }
                }
            } else if let Some(list) = current {
                if list.reviews.is_empty() {
                    EmptyState {
                        icon: "⭐".to_string(),
                        title: "No reviews found".to_string(),
                        description: "No reviews match the current filter.".to_string()
                    }
                } else {
                    div {
                        class: "space-y-4",
                        for review in list.reviews.iter() {
                            ReviewCard {
                                key: "{review.id}",
                                review: review.clone(),
                                confirming: confirm_delete() == Some(review.id.clone()),
                                mutating: mutating(),
                                on_toggle_approval: {
                                    let mut toggle_approval = toggle_approval.clone();
                                    move |args: (String, bool)| toggle_approval(args)
                                },
                                on_arm_delete: move |id: String| confirm_delete.set(Some(id)),
                                on_cancel_delete: move |_| confirm_delete.set(None),
                                on_confirm_delete: {
                                    let mut delete_review = delete_review.clone();
                                    move |id: String| delete_review(id)
                                },
                            }
                        }
                    }

                    Pager {
                        pagination: list.pagination,
                        on_page: move |page: u32| {
                            let next = query.peek().with_page(page);
                            query.set(next);
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewCard(
    review: Review,
    confirming: bool,
    mutating: bool,
    on_toggle_approval: EventHandler<(String, bool)>,
    on_arm_delete: EventHandler<String>,
    on_cancel_delete: EventHandler<()>,
    on_confirm_delete: EventHandler<String>,
) -> Element {
    let approval_id = review.id.clone();
    let arm_id = review.id.clone();
    let confirm_id = review.id.clone();
    let approve_next = !review.is_approved;

    rsx! {
        div {
            class: "bg-white shadow rounded-lg p-6",
            div {
                class: "flex items-start justify-between",
                div {
                    div {
                        class: "flex items-center space-x-2",
                        span { class: "text-yellow-400 text-lg", "{stars(review.rating)}" }
                        span {
                            class: if review.is_approved {
                                "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800"
                            } else {
                                "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-yellow-100 text-yellow-800"
                            },
                            if review.is_approved { "Approved" } else { "Pending" }
                        }
                    }
                    h3 {
                        class: "mt-1 text-base font-medium text-gray-900",
                        "{review.title}"
                    }
                    p {
                        class: "text-xs text-gray-500",
                        "{review.author_name} on {review.product_name} · {format_date(review.created_at)}"
                    }
                }
                span {
                    class: "text-xs text-gray-400 whitespace-nowrap",
                    "👍 {review.helpful_count}"
                }
            }

            p {
                class: "mt-3 text-sm text-gray-700",
                "{review.comment}"
            }

            div {
                class: "mt-4 flex items-center justify-end space-x-3",
                button {
                    r#type: "button",
                    disabled: mutating,
                    class: if review.is_approved {
                        "px-3 py-1.5 text-sm font-medium rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                    } else {
                        "px-3 py-1.5 text-sm font-medium rounded-md text-white bg-green-600 hover:bg-green-700 disabled:opacity-50"
                    },
                    onclick: move |_| on_toggle_approval.call((approval_id.clone(), approve_next)),
                    if review.is_approved { "Reject" } else { "Approve" }
                }
                if confirming {
                    button {
                        r#type: "button",
                        disabled: mutating,
                        class: "px-3 py-1.5 text-sm font-medium rounded-md text-white bg-red-600 hover:bg-red-700 disabled:opacity-50",
                        onclick: move |_| on_confirm_delete.call(confirm_id.clone()),
                        "Confirm Delete"
                    }
                    button {
                        r#type: "button",
                        class: "px-3 py-1.5 text-sm font-medium rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50",
                        onclick: move |_| on_cancel_delete.call(()),
                        "Cancel"
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "px-3 py-1.5 text-sm font-medium rounded-md border border-red-300 text-red-600 hover:bg-red-50",
                        onclick: move |_| on_arm_delete.call(arm_id.clone()),
                        "Delete"
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
    fn test_star_counts_sum_to_five() {
        assert_eq!(star_counts(0), (0, 5));
        assert_eq!(star_counts(3), (3, 2));
        assert_eq!(star_counts(5), (5, 0));
    }

    #[test]
    fn test_star_counts_clamps_out_of_range_rating() {
        assert_eq!(star_counts(9), (5, 0));
    }

    #[test]
    fn test_stars_renders_filled_then_empty() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn test_first_page_of_two_renders_three_cards_and_stats() {
        let review = |id: &str| {
            format!(
                r#"{{
                    "id": "{id}",
                    "authorName": "Ana",
                    "authorEmail": "ana@example.com",
                    "productName": "Mug",
                    "rating": 4,
                    "title": "Nice",
                    "comment": "Good mug.",
                    "createdAt": "2025-04-01T09:00:00Z",
                    "isApproved": true,
                    "helpfulCount": 1
                }}"#
            )
        };
        let json = format!(
            r#"{{
                "reviews": [{}, {}, {}],
                "pagination": {{
                    "currentPage": 1, "totalPages": 2,
                    "hasPrevPage": false, "hasNextPage": true
                }},
                "stats": {{"total": 13, "approved": 8, "pending": 5, "averageRating": 4.2}}
            }}"#,
            review("r1"),
            review("r2"),
            review("r3")
        );

        let list: ReviewListData = serde_json::from_str(&json).unwrap();
        assert_eq!(list.reviews.len(), 3);
        assert_eq!(list.stats.total, 13);
        assert_eq!(list.stats.approved, 8);
        assert_eq!(list.stats.pending, 5);
        assert_eq!(format_rating(list.stats.average_rating), "4.2");
        assert_eq!(
            format!(
                "Page {} of {}",
                list.pagination.current_page, list.pagination.total_pages
            ),
            "Page 1 of 2"
        );
        assert_eq!(crate::ui::pages::page_numbers(list.pagination.total_pages).len(), 2);
    }
}
