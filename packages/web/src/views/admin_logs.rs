//! Admin action audit trail.

use dioxus::prelude::*;

use api::ApiClient;
use store::Role;
use ui::{use_session, LoadingSpinner};

use super::log_browser::LogBrowser;

#[component]
pub fn AdminLogs() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();

    let logs = use_resource(move || {
        let client = client.clone();
        async move {
            let Some(user) = session().current_user().cloned() else {
                return Ok(Vec::new());
            };
            if user.role != Role::Admin {
                return Ok(Vec::new());
            }
            client.admin_logs(&user).await
        }
    });

    let is_admin = session()
        .current_user()
        .is_some_and(|user| user.role == Role::Admin);

    if !is_admin {
        return rsx! {
            div {
                class: "page",
                h1 { "Admin Logs" }
                p { class: "page-error", "This page is for administrators." }
            }
        };
    }

    rsx! {
        div {
            class: "page",
            h1 { "Admin Logs" }

            {match &*logs.read() {
                Some(Ok(entries)) => rsx! { LogBrowser { logs: entries.clone(), show_email: true } },
                Some(Err(_)) => rsx! { p { class: "page-error", "An error occurred while fetching the logs." } },
                None => rsx! { LoadingSpinner {} },
            }}
        }
    }
}
