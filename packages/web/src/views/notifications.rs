//! Notification feed: claim activity relevant to the current viewer,
//! newest first. The shell's sync pass has already marked these read on the
//! backend; the `read` flags here are the values seen at fetch time, so
//! fresh arrivals still stand out.

use dioxus::prelude::*;

use ui::{use_notification_feed, use_session};

use crate::Route;

#[component]
pub fn Notifications() -> Element {
    let session = use_session();
    let feed = use_notification_feed();
    let nav = use_navigator();

    if session().current_user().is_none() {
        nav.replace(Route::Signin {});
        return rsx! {};
    }

    let notifications = feed().notifications.clone();

    rsx! {
        div {
            class: "page",
            h1 { "Notifications" }

            if notifications.is_empty() {
                p { class: "page-empty", "Nothing new — no claim activity on your items." }
            } else {
                div {
                    class: "notification-list",
                    for report in notifications {
                        {
                            let when = report.created_at.format("%b %e, %Y %H:%M").to_string();
                            let claimant = report.claimed_by.clone().unwrap_or_default();
                            rsx! {
                                div {
                                    key: "{report.id}",
                                    class: if report.read { "notification-item" } else { "notification-item notification-unread" },
                                    div {
                                        class: "notification-text",
                                        b { "{report.item_name}" }
                                        " ({report.report_type.as_str()}) was claimed by "
                                        b { "{claimant}" }
                                    }
                                    span { class: "notification-time", "{when}" }
                                    if !report.read {
                                        span { class: "notification-new", "new" }
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
