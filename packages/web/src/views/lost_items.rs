//! Public listing of lost-item reports.

use dioxus::prelude::*;

use api::ApiClient;
use store::ReportType;
use ui::LoadingSpinner;

use super::report_card::ReportCard;

#[component]
pub fn LostItems() -> Element {
    let client = use_context::<ApiClient>();
    let reports = use_resource(move || {
        let client = client.clone();
        async move { client.all_reports().await }
    });

    rsx! {
        div {
            class: "page",
            h1 { "Lost Items" }
            p { class: "page-subtitle", "Items fellow students are still looking for." }

            {match &*reports.read() {
                Some(Ok(items)) => {
                    let lost: Vec<_> = items
                        .iter()
                        .filter(|report| report.report_type == ReportType::Lost)
                        .cloned()
                        .collect();
                    if lost.is_empty() {
                        rsx! { p { class: "page-empty", "No lost items reported right now." } }
                    } else {
                        rsx! {
                            div {
                                class: "report-grid",
                                for report in lost {
                                    ReportCard { key: "{report.id}", report: report.clone() }
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
