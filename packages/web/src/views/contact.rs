//! Contact form.

use dioxus::prelude::*;

use api::{ApiClient, ContactMessage};
use ui::{push_notice, use_notices, use_session, NoticeLevel};

#[component]
pub fn ContactUs() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut notices = use_notices();

    let mut name = use_signal(String::new);
    let mut email = use_signal(|| {
        session
            .peek()
            .current_user()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    });
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let name_value = name.peek().trim().to_string();
            let email_value = email.peek().trim().to_string();
            let message_value = message.peek().trim().to_string();

            if name_value.is_empty() || message_value.is_empty() {
                push_notice(&mut notices, NoticeLevel::Error, "Please fill in all fields");
                return;
            }
            if email_value.is_empty() || !email_value.contains('@') {
                push_notice(&mut notices, NoticeLevel::Error, "Please enter a valid email");
                return;
            }

            sending.set(true);
            let contact = ContactMessage {
                name: name_value,
                email: email_value,
                message: message_value,
            };
            match client.send_contact(&contact).await {
                Ok(()) => {
                    push_notice(&mut notices, NoticeLevel::Success, "Message sent, thank you!");
                    name.set(String::new());
                    message.set(String::new());
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
            sending.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { "Contact Us" }
            p { class: "page-subtitle", "Questions about a listing or a claim? Write to the Lost & Found desk." }

            form {
                class: "contact-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { "Name" }
                    input {
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Message" }
                    textarea {
                        value: message(),
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                    }
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: sending(),
                    if sending() { "Sending..." } else { "Send message" }
                }
            }
        }
    }
}
