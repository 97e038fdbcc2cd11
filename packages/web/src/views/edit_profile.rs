//! Profile editor: first/last name. The backend response body is not
//! relied upon; the edit is merged locally and the session copy
//! re-persisted.

use dioxus::prelude::*;

use api::{ApiClient, UpdateProfileRequest};
use store::User;
use ui::{complete_login, push_notice, use_notices, use_session, NoticeLevel};

use crate::Route;

#[component]
pub fn EditProfile() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();

    let user = session().current_user().cloned();
    let mut first_name = use_signal(|| {
        user.as_ref()
            .and_then(|u| u.first_name.clone())
            .unwrap_or_default()
    });
    let mut last_name = use_signal(|| {
        user.as_ref()
            .and_then(|u| u.last_name.clone())
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);

    let Some(user) = user else {
        nav.replace(Route::Signin {});
        return rsx! {};
    };
    let email = user.email.clone();

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let user = user.clone();
        spawn(async move {
            let first = first_name.peek().trim().to_string();
            let last = last_name.peek().trim().to_string();
            if first.is_empty() {
                push_notice(&mut notices, NoticeLevel::Error, "First name is required");
                return;
            }

            let update = UpdateProfileRequest {
                first_name: Some(first.clone()),
                last_name: (!last.is_empty()).then_some(last.clone()),
            };

            saving.set(true);
            match client.update_profile(&user, &update).await {
                Ok(()) => {
                    let updated = User {
                        first_name: update.first_name.clone(),
                        last_name: update.last_name.clone(),
                        ..user.clone()
                    };
                    complete_login(session, updated);
                    push_notice(&mut notices, NoticeLevel::Success, "Profile updated");
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { "Edit Profile" }

            form {
                class: "profile-form",
                onsubmit: handle_save,

                div {
                    class: "form-field",
                    label { "Email" }
                    input { r#type: "email", value: "{email}", disabled: true }
                }

                div {
                    class: "form-field",
                    label { "First name" }
                    input {
                        r#type: "text",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Last name" }
                    input {
                        r#type: "text",
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save changes" }
                }
            }
        }
    }
}
