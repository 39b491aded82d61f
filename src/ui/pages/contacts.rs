// src/ui/pages/contacts.rs - Customer contact inbox

use dioxus::prelude::*;

use crate::api::{ContactUpdate, FetchTicket, ListQuery, ALL_SENTINEL};
use crate::model::{Contact, ContactListData, ContactPriority, ContactStatus};
use crate::ui::pages::{DetailModal, EmptyState, ErrorBanner, PageWrapper, Pager, StatCard};
use crate::ui::state::use_api;
use crate::utils::format_datetime;

/// Opening a message marks it read, but only out of the `new` state. A
/// replied or resolved message never regresses to `read`.
pub fn should_mark_read(status: ContactStatus) -> bool {
    status == ContactStatus::New
}

#[component]
pub fn Contacts() -> Element {
    let api = use_api();
    let config = use_context::<crate::config::AppConfig>();

    let mut query = use_signal(move || ListQuery {
        limit: config.page_size,
        ..ListQuery::default()
    });
    let mut data = use_signal(|| None::<ContactListData>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let ticket = use_hook(FetchTicket::new);

    let mut search_input = use_signal(String::new);
    let mut selected = use_signal(|| None::<Contact>);
    let mut pending_status = use_signal(|| None::<ContactStatus>);
    let mut pending_priority = use_signal(|| None::<ContactPriority>);
    let mut notes_input = use_signal(String::new);
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
                let result = api.list_contacts(&q).await;
                if !ticket.is_current(issued) {
                    return;
                }
                match result {
                    Ok(list) => {
                        data.set(Some(list));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "contact list fetch failed");
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

    // Opening a message shows the detail modal and, for a new message, fires
    // exactly one status transition to read. The decision is taken from the
    // message snapshot at open time, so reopening an already-read message
    // sends nothing.
    let open_contact = {
        let api = api.clone();
        move |contact: Contact| {
            let mark = should_mark_read(contact.status);
            pending_status.set(Some(if mark {
                ContactStatus::Read
            } else {
                contact.status
            }));
            pending_priority.set(Some(contact.priority));
            notes_input.set(contact.admin_notes.clone().unwrap_or_default());
            let id = contact.id.clone();
            selected.set(Some(contact));

            if mark {
                let api = api.clone();
                spawn(async move {
                    let update = ContactUpdate {
                        status: ContactStatus::Read,
                        priority: None,
                        admin_notes: None,
                    };
                    match api.update_contact(&id, &update).await {
                        Ok(()) => {
                            let same = query.peek().clone();
                            query.set(same);
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, contact_id = %id, "mark-read failed");
                        }
                    }
                });
            }
        }
    };

    let save_update = {
        let api = api.clone();
        move |_: ()| {
            let Some(contact) = selected.peek().clone() else {
                return;
            };
            let Some(status) = *pending_status.peek() else {
                return;
            };
            let api = api.clone();
            let update = ContactUpdate {
                status,
                priority: *pending_priority.peek(),
                admin_notes: Some(notes_input.peek().clone()),
            };
            mutating.set(true);
            spawn(async move {
                match api.update_contact(&contact.id, &update).await {
                    Ok(()) => {
                        selected.set(None);
                        let same = query.peek().clone();
                        query.set(same);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, contact_id = %contact.id, "contact update failed");
                        error.set(Some(e.user_message()));
                    }
                }
                mutating.set(false);
            });
        }
    };

    let current = data();
    let status_value = query().status;
    let priority_value = query().priority;

    rsx! {
        PageWrapper {
            title: "Contacts".to_string(),
            subtitle: Some("Customer messages and inquiries".to_string()),

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if let Some(list) = current.as_ref() {
                div {
                    class: "grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4",
                    StatCard {
                        title: "Total Messages".to_string(),
                        value: list.stats.total.to_string(),
                        icon: Some("✉️".to_string())
                    }
                    StatCard {
                        title: "New".to_string(),
                        value: list.stats.new.to_string(),
                        icon: Some("🆕".to_string())
                    }
                    StatCard {
                        title: "Replied".to_string(),
                        value: list.stats.replied.to_string(),
                        icon: Some("↩️".to_string())
                    }
                    StatCard {
                        title: "Resolved".to_string(),
                        value: list.stats.resolved.to_string(),
                        icon: Some("✅".to_string())
                    }
                }
            }

            // Search and filters
            div {
                class: "bg-white shadow rounded-lg p-4 flex flex-col sm:flex-row gap-4",
                form {
                    class: "flex-1 flex gap-2",
                    onsubmit: on_search,
                    input {
                        r#type: "search",
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                        placeholder: "Search by name, email, or subject...",
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
                    onchange: move |e: FormEvent| {
                        let next = query.peek().with_status(e.value());
                        query.set(next);
                    },
                    option { value: "{ALL_SENTINEL}", "All Statuses" }
                    for status in ContactStatus::ALL {
                        option { value: "{status.as_str()}", "{status.label()}" }
                    }
                }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                    value: "{priority_value}",
                    onchange: move |e: FormEvent| {
                        let next = query.peek().with_priority(e.value());
                        query.set(next);
                    },
                    option { value: "{ALL_SENTINEL}", "All Priorities" }
                    for priority in ContactPriority::ALL {
                        option { value: "{priority.as_str()}", "{priority.label()}" }
                    }
                }
            }

            if loading() && current.is_none() {
                div {
                    class: "flex items-center justify-center py-24",
                    div { class: "animate-spin rounded-full h-16 w-16 border-b-2 border-blue-600" }
                }
            } else if let Some(list) = current {
                if list.contacts.is_empty() {
                    EmptyState {
                        icon: "📭".to_string(),
                        title: "No messages found".to_string(),
                        description: "No messages match the current search and filters.".to_string()
                    }
                } else {
                    div {
                        class: "bg-white shadow rounded-lg divide-y divide-gray-200",
                        for contact in list.contacts.iter() {
                            ContactRow {
                                key: "{contact.id}",
                                contact: contact.clone(),
                                on_open: {
                                    let mut open_contact = open_contact.clone();
                                    move |contact: Contact| open_contact(contact)
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

            if let Some(contact) = selected() {
                DetailModal {
                    title: contact.subject.clone(),
                    on_close: move |_| selected.set(None),
                    ContactDetail {
                        contact: contact.clone(),
                        pending_status: pending_status,
                        pending_priority: pending_priority,
                        notes_input: notes_input,
                        mutating: mutating(),
                        on_save: save_update.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn ContactRow(contact: Contact, on_open: EventHandler<Contact>) -> Element {
    let row_contact = contact.clone();

    rsx! {
        button {
            r#type: "button",
            class: "w-full text-left px-6 py-4 hover:bg-gray-50 focus:outline-none",
            onclick: move |_| on_open.call(row_contact.clone()),
            div {
                class: "flex items-center justify-between",
                div {
                    class: "flex items-center space-x-3",
                    if contact.status == ContactStatus::New {
                        span { class: "h-2 w-2 rounded-full bg-blue-500" }
                    }
                    span {
                        class: if contact.status == ContactStatus::New {
                            "text-sm font-semibold text-gray-900"
                        } else {
                            "text-sm font-medium text-gray-700"
                        },
                        "{contact.subject}"
                    }
                }
                span {
                    class: "text-xs text-gray-400",
                    "{format_datetime(contact.created_at)}"
                }
            }
            div {
                class: "mt-1 flex items-center justify-between",
                p {
                    class: "text-sm text-gray-500",
                    "{contact.name} · {contact.email}"
                }
                div {
                    class: "space-x-2",
                    span {
                        class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium {contact.status.badge_class()}",
                        "{contact.status.label()}"
                    }
                    span {
                        class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium {contact.priority.badge_class()}",
                        "{contact.priority.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn ContactDetail(
    contact: Contact,
    pending_status: Signal<Option<ContactStatus>>,
    pending_priority: Signal<Option<ContactPriority>>,
    notes_input: Signal<String>,
    mutating: bool,
    on_save: EventHandler<()>,
) -> Element {
    let selected_status = pending_status().unwrap_or(contact.status);
    let selected_priority = pending_priority().unwrap_or(contact.priority);

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm font-medium text-gray-900", "{contact.name}" }
                    p { class: "text-sm text-gray-500", "{contact.email}" }
                    if let Some(phone) = contact.phone.as_ref() {
                        p { class: "text-sm text-gray-500", "{phone}" }
                    }
                }
                span {
                    class: "text-xs text-gray-400",
                    "{format_datetime(contact.created_at)}"
                }
            }

            div {
                class: "bg-gray-50 rounded-md p-4",
                p {
                    class: "text-sm text-gray-700 whitespace-pre-wrap",
                    "{contact.message}"
                }
            }

            div {
                class: "border-t border-gray-200 pt-4 space-y-3",
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Status" }
                        select {
                            class: "block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                            value: "{selected_status.as_str()}",
                            onchange: move |e: FormEvent| {
                                if let Some(status) = ContactStatus::ALL.iter().find(|s| s.as_str() == e.value()) {
                                    pending_status.set(Some(*status));
                                }
                            },
                            for status in ContactStatus::ALL {
                                option {
                                    value: "{status.as_str()}",
                                    selected: status == selected_status,
                                    "{status.label()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Priority" }
                        select {
                            class: "block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                            value: "{selected_priority.as_str()}",
                            onchange: move |e: FormEvent| {
                                if let Some(priority) = ContactPriority::ALL.iter().find(|p| p.as_str() == e.value()) {
                                    pending_priority.set(Some(*priority));
                                }
                            },
                            for priority in ContactPriority::ALL {
                                option {
                                    value: "{priority.as_str()}",
                                    selected: priority == selected_priority,
                                    "{priority.label()}"
                                }
                            }
                        }
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Admin Notes" }
                    textarea {
                        class: "block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                        rows: 3,
                        placeholder: "Internal notes about this message",
                        value: "{notes_input}",
                        oninput: move |e| notes_input.set(e.value()),
                    }
                }
                button {
                    r#type: "button",
                    disabled: mutating,
                    class: "w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed",
                    onclick: move |_| on_save.call(()),
                    if mutating { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_new_messages_are_marked_read() {
        assert!(should_mark_read(ContactStatus::New));
        assert!(!should_mark_read(ContactStatus::Read));
        assert!(!should_mark_read(ContactStatus::Replied));
        assert!(!should_mark_read(ContactStatus::Resolved));
    }
}
