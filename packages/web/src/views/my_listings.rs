//! The signed-in user's own reports.

use dioxus::prelude::*;

use api::ApiClient;
use ui::{use_session, LoadingSpinner};

use super::report_card::ReportCard;
use crate::Route;

#[component]
pub fn MyListings() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let nav = use_navigator();

    let reports = use_resource(move || {
        let client = client.clone();
        async move {
            let Some(user) = session().current_user().cloned() else {
                return Ok(Vec::new());
            };
            client.user_reports(&user).await
        }
    });

    if session().current_user().is_none() {
        nav.replace(Route::Signin {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "page",
            h1 { "My Reports" }

            {match &*reports.read() {
                Some(Ok(items)) => {
                    if items.is_empty() {
                        rsx! { p { class: "page-empty", "You haven't filed any reports yet." } }
                    } else {
                        rsx! {
                            div {
                                class: "report-grid",
                                for report in items.clone() {
                                    ReportCard { key: "{report.id}", report: report.clone() }
                                }
                            }
                        }
                    }
                }
                Some(Err(_)) => rsx! { p { class: "page-error", "Could not load your reports." } },
                None => rsx! { LoadingSpinner {} },
            }}
        }
    }
}
