//! The signed-in user's own activity log.

use dioxus::prelude::*;

use api::ApiClient;
use ui::{use_session, LoadingSpinner};

use super::log_browser::LogBrowser;
use crate::Route;

#[component]
pub fn UserLogs() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let nav = use_navigator();

    let logs = use_resource(move || {
        let client = client.clone();
        async move {
            let Some(user) = session().current_user().cloned() else {
                return Ok(Vec::new());
            };
            client.user_logs(&user).await
        }
    });

    if session().current_user().is_none() {
        nav.replace(Route::Signin {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "page",
            h1 { "Your Activity Logs" }

            {match &*logs.read() {
                Some(Ok(entries)) => rsx! { LogBrowser { logs: entries.clone(), show_email: false } },
                Some(Err(_)) => rsx! { p { class: "page-error", "An error occurred while fetching your logs." } },
                None => rsx! { LoadingSpinner {} },
            }}
        }
    }
}
