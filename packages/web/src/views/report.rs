//! Report form: file a new lost or found listing.

use dioxus::prelude::*;

use api::{ApiClient, NewReport};
use store::ReportType;
use ui::{push_notice, use_notices, use_session, NoticeLevel};

use crate::Route;

#[component]
pub fn Report() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();

    let mut report_type = use_signal(|| ReportType::Lost);
    let mut item_name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let Some(user) = session.peek().current_user().cloned() else {
                push_notice(&mut notices, NoticeLevel::Error, "Please sign in to file a report");
                nav.push(Route::Signin {});
                return;
            };

            let name = item_name.peek().trim().to_string();
            let details = description.peek().trim().to_string();
            let place = location.peek().trim().to_string();
            if name.is_empty() || details.is_empty() || place.is_empty() {
                push_notice(&mut notices, NoticeLevel::Error, "Please fill in all required fields");
                return;
            }

            let image_url = image.peek().trim().to_string();
            let report = NewReport {
                report_type: *report_type.peek(),
                item_name: name,
                description: details,
                location: place,
                image: (!image_url.is_empty()).then_some(image_url),
            };

            submitting.set(true);
            match client.create_report(&user, &report).await {
                Ok(()) => {
                    push_notice(&mut notices, NoticeLevel::Success, "Report submitted!");
                    submitting.set(false);
                    nav.push(Route::MyListings {});
                }
                Err(err) => {
                    push_notice(&mut notices, NoticeLevel::Error, &err.to_string());
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "page report-page",
            h1 { "Report an item" }

            form {
                class: "report-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { "I have..." }
                    select {
                        value: report_type().as_str(),
                        onchange: move |evt: FormEvent| {
                            let selected = if evt.value() == "found" {
                                ReportType::Found
                            } else {
                                ReportType::Lost
                            };
                            report_type.set(selected);
                        },
                        option { value: "lost", "Lost an item" }
                        option { value: "found", "Found an item" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Item name" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. Black wallet",
                        value: item_name(),
                        oninput: move |evt: FormEvent| item_name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Description" }
                    textarea {
                        placeholder: "Color, brand, identifying marks...",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Location" }
                    input {
                        r#type: "text",
                        placeholder: "Where was it lost or found?",
                        value: location(),
                        oninput: move |evt: FormEvent| location.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Image URL (optional)" }
                    input {
                        r#type: "url",
                        placeholder: "https://...",
                        value: image(),
                        oninput: move |evt: FormEvent| image.set(evt.value()),
                    }
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit report" }
                }
            }
        }
    }
}
