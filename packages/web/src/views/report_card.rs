use dioxus::prelude::*;

use store::Report;

/// Listing card shared by the browse pages. Extra controls (claim, verify)
/// ride in through `action`.
#[component]
pub fn ReportCard(report: Report, action: Option<Element>) -> Element {
    let when = report.created_at.format("%b %e, %Y").to_string();

    rsx! {
        div {
            class: "report-card",
            if let Some(image) = report.image.as_ref() {
                img { class: "report-card-image", src: "{image}", alt: "{report.item_name}" }
            }
            div {
                class: "report-card-body",
                div {
                    class: "report-card-header",
                    h3 { "{report.item_name}" }
                    span {
                        class: "report-card-type report-card-type-{report.report_type.as_str()}",
                        "{report.report_type.as_str()}"
                    }
                }
                p { class: "report-card-description", "{report.description}" }
                p { class: "report-card-meta", "{report.location} — {when}" }
                if report.claimed_by.is_some() {
                    p {
                        class: "report-card-claimed",
                        if report.verified { "Claim verified" } else { "Claimed — pending verification" }
                    }
                }
                {action}
            }
        }
    }
}
