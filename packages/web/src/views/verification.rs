//! Admin review queue: claimed reports awaiting verification.

use dioxus::prelude::*;

use api::{ApiClient, ReportsGateway};
use store::Role;
use ui::{push_notice, use_notices, use_session, LoadingSpinner, NoticeLevel};

use super::report_card::ReportCard;

#[component]
pub fn VerificationPage() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut notices = use_notices();

    let list_client = client.clone();
    let mut reports = use_resource(move || {
        let client = list_client.clone();
        async move {
            let Some(user) = session().current_user().cloned() else {
                return Ok(Vec::new());
            };
            if user.role != Role::Admin {
                return Ok(Vec::new());
            }
            client.list_reports(&user).await
        }
    });

    let is_admin = session()
        .current_user()
        .is_some_and(|user| user.role == Role::Admin);

    let on_decide = move |(report_id, approve): (String, bool)| {
        let client = client.clone();
        spawn(async move {
            let Some(user) = session.peek().current_user().cloned() else {
                return;
            };
            let outcome = if approve {
                client.verify_claim(&user, &report_id).await
            } else {
                client.reset_claim(&user, &report_id).await
            };
            match outcome {
                Ok(()) => {
                    let message = if approve {
                        "Claim verified"
                    } else {
                        "Claim reset — the item is open again"
                    };
                    push_notice(&mut notices, NoticeLevel::Success, message);
                    reports.restart();
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    if !is_admin {
        return rsx! {
            div {
                class: "page",
                h1 { "Verification" }
                p { class: "page-error", "This page is for administrators." }
            }
        };
    }

    rsx! {
        div {
            class: "page",
            h1 { "Verification" }
            p { class: "page-subtitle", "Review pending claims before items are handed over." }

            {match &*reports.read() {
                Some(Ok(items)) => {
                    let pending: Vec<_> = items
                        .iter()
                        .filter(|report| report.claimed_by.is_some() && !report.verified)
                        .cloned()
                        .collect();
                    if pending.is_empty() {
                        rsx! { p { class: "page-empty", "No claims waiting for review." } }
                    } else {
                        rsx! {
                            div {
                                class: "report-grid",
                                for report in pending {
                                    {
                                        let report_id = report.id.clone();
                                        let claimant = report.claimed_by.clone().unwrap_or_default();
                                        let action = rsx! {
                                            p { class: "report-card-meta", "Claimed by {claimant}" }
                                            div {
                                                class: "report-card-actions",
                                                button {
                                                    class: "report-card-action",
                                                    onclick: {
                                                        let mut on_decide = on_decide.clone();
                                                        let report_id = report_id.clone();
                                                        move |_| on_decide((report_id.clone(), true))
                                                    },
                                                    "Verify"
                                                }
                                                button {
                                                    class: "report-card-action report-card-action-secondary",
                                                    onclick: {
                                                        let mut on_decide = on_decide.clone();
                                                        let report_id = report_id.clone();
                                                        move |_| on_decide((report_id.clone(), false))
                                                    },
                                                    "Reset"
                                                }
                                            }
                                        };
                                        rsx! {
                                            ReportCard {
                                                key: "{report.id}",
                                                report: report.clone(),
                                                action: Some(action),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(_)) => rsx! { p { class: "page-error", "Could not load claims." } },
                None => rsx! { LoadingSpinner {} },
            }}
        }
    }
}
