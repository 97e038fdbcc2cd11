//! Public listing of found-item reports, with a claim action for
//! signed-in users.

use dioxus::prelude::*;

use api::ApiClient;
use store::ReportType;
use ui::{push_notice, use_notices, use_session, LoadingSpinner, NoticeLevel};

use super::report_card::ReportCard;
use crate::Route;

#[component]
pub fn FoundItems() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();

    let list_client = client.clone();
    let mut reports = use_resource(move || {
        let client = list_client.clone();
        async move { client.all_reports().await }
    });

    let on_claim = move |report_id: String| {
        let client = client.clone();
        spawn(async move {
            let Some(user) = session.peek().current_user().cloned() else {
                push_notice(&mut notices, NoticeLevel::Error, "Please sign in to claim an item");
                nav.push(Route::Signin {});
                return;
            };
            match client.claim_report(&user, &report_id).await {
                Ok(()) => {
                    push_notice(
                        &mut notices,
                        NoticeLevel::Success,
                        "Claim submitted! An admin will verify it shortly.",
                    );
                    reports.restart();
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
        });
    };

    let viewer_email = session()
        .current_user()
        .map(|user| user.email.clone());

    rsx! {
        div {
            class: "page",
            h1 { "Found Items" }
            p { class: "page-subtitle", "Recognize something? Claim it and pick it up after verification." }

            {match &*reports.read() {
                Some(Ok(items)) => {
                    let found: Vec<_> = items
                        .iter()
                        .filter(|report| report.report_type == ReportType::Found)
                        .cloned()
                        .collect();
                    if found.is_empty() {
                        rsx! { p { class: "page-empty", "Nothing has been handed in yet." } }
                    } else {
                        rsx! {
                            div {
                                class: "report-grid",
                                for report in found {
                                    {
                                        let claimable = report.claimed_by.is_none()
                                            && viewer_email
                                                .as_deref()
                                                .is_some_and(|email| email != report.user.email);
                                        let report_id = report.id.clone();
                                        let action = claimable.then(|| rsx! {
                                            button {
                                                class: "report-card-action",
                                                onclick: {
                                                    let mut on_claim = on_claim.clone();
                                                    let report_id = report_id.clone();
                                                    move |_| on_claim(report_id.clone())
                                                },
                                                "This is mine"
                                            }
                                        });
                                        rsx! {
                                            ReportCard {
                                                key: "{report.id}",
                                                report: report.clone(),
                                                action: action,
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(_)) => rsx! { p { class: "page-error", "Could not load reports. Please try again later." } },
                None => rsx! { LoadingSpinner {} },
            }}
        }
    }
}
