//! Landing page.

use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let greeting = session()
        .current_user()
        .map(|user| format!("Welcome back, {}!", user.display_name()));

    rsx! {
        div {
            class: "home-page",
            section {
                class: "home-hero",
                h1 { "Campus Lost & Found" }
                p {
                    "Lost something on campus? Found something that isn't yours? "
                    "Report it here and we'll help it find its way home."
                }
                if let Some(greeting) = greeting {
                    p { class: "home-greeting", "{greeting}" }
                }
                div {
                    class: "home-actions",
                    Link { to: Route::Report {}, class: "home-action", "Report an item" }
                    Link { to: Route::LostItems {}, class: "home-action", "Browse lost items" }
                    Link { to: Route::FoundItems {}, class: "home-action", "Browse found items" }
                }
            }

            section {
                class: "home-steps",
                div {
                    class: "home-step",
                    h3 { "1. Report" }
                    p { "File a lost or found report with a description and location." }
                }
                div {
                    class: "home-step",
                    h3 { "2. Match" }
                    p { "Browse listings and claim the item that belongs to you." }
                }
                div {
                    class: "home-step",
                    h3 { "3. Verify" }
                    p { "An administrator reviews the claim and hands the item over." }
                }
            }
        }
    }
}
