//! Sign-in page: email OTP enrollment or direct login for already-verified
//! users, every attempt gated by a fresh reCAPTCHA token.

use dioxus::prelude::*;

use api::{ApiClient, AuthGateway, SigninFlow};
use ui::{
    complete_login, push_notice, use_notices, use_session, NoticeLevel, RecaptchaAttestor,
};

use crate::Route;

#[component]
pub fn Signin() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut is_otp_sent = use_signal(|| false);
    let mut is_loading = use_signal(|| false);
    let mut is_verified = use_signal(|| false);

    // Load the attestation widget as soon as the page mounts.
    {
        let site_key = client.config().recaptcha_site_key.clone();
        use_effect(move || ui::recaptcha::install_widget(&site_key));
    }

    // Already signed in: straight to the landing page.
    if session().current_user().is_some() {
        nav.replace(Route::Home {});
    }

    let check_client = client.clone();
    let on_email_input = move |evt: FormEvent| {
        let value = evt.value();
        email.set(value.clone());

        if value.contains('@') {
            let client = check_client.clone();
            spawn(async move {
                let verified = client.check_verification(&value).await.unwrap_or(false);
                // Apply only if the input still shows the email we asked
                // about; results for stale text are discarded.
                if *email.peek() == value {
                    is_verified.set(verified);
                }
            });
        }
    };

    let send_client = client.clone();
    let on_send_otp = move |_| {
        let client = send_client.clone();
        spawn(async move {
            is_loading.set(true);
            let email_value = email.peek().to_string();
            let attestor = RecaptchaAttestor::new(client.config().recaptcha_site_key.clone());
            let flow = SigninFlow::new(&client, &attestor, client.config());
            match flow.send_otp(&email_value).await {
                Ok(()) => {
                    is_otp_sent.set(true);
                    push_notice(
                        &mut notices,
                        NoticeLevel::Success,
                        "OTP sent successfully to your email!",
                    );
                }
                Err(err) => push_notice(&mut notices, NoticeLevel::Error, &err.to_string()),
            }
            is_loading.set(false);
        });
    };

    let verify_client = client.clone();
    let on_verify_otp = move |_| {
        let client = verify_client.clone();
        spawn(async move {
            is_loading.set(true);
            let email_value = email.peek().to_string();
            let otp_value = otp.peek().to_string();
            let attestor = RecaptchaAttestor::new(client.config().recaptcha_site_key.clone());
            let flow = SigninFlow::new(&client, &attestor, client.config());
            match flow.verify_otp(&email_value, &otp_value).await {
                Ok(user) => {
                    complete_login(session, user);
                    push_notice(&mut notices, NoticeLevel::Success, "Login successful!");
                    is_loading.set(false);
                    // Let the notice show before leaving the page.
                    ui::sleep_ms(1000).await;
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    push_notice(&mut notices, NoticeLevel::Error, &err.to_string());
                    is_loading.set(false);
                }
            }
        });
    };

    let login_client = client.clone();
    let on_direct_login = move |_| {
        let client = login_client.clone();
        spawn(async move {
            is_loading.set(true);
            let email_value = email.peek().to_string();
            let attestor = RecaptchaAttestor::new(client.config().recaptcha_site_key.clone());
            let flow = SigninFlow::new(&client, &attestor, client.config());
            match flow.direct_login(&email_value).await {
                Ok(user) => {
                    complete_login(session, user);
                    push_notice(&mut notices, NoticeLevel::Success, "Login successful!");
                    is_loading.set(false);
                    ui::sleep_ms(1000).await;
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    push_notice(&mut notices, NoticeLevel::Error, &err.to_string());
                    is_loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "signin-page",
            div {
                class: "signin-card",
                h2 { class: "signin-title", "Sign in to your Lost & Found Account" }

                div {
                    class: "signin-field",
                    label { "Email Address" }
                    input {
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: email(),
                        oninput: on_email_input,
                    }
                    p {
                        class: "signin-hint",
                        "Use your campus email for students, specific emails for admins"
                    }
                }

                if !email().is_empty() {
                    if is_verified() {
                        button {
                            class: "signin-button",
                            disabled: is_loading(),
                            onclick: on_direct_login,
                            if is_loading() { "Logging in..." } else { "Login" }
                        }
                    } else if !is_otp_sent() {
                        button {
                            class: "signin-button signin-button-send",
                            disabled: is_loading(),
                            onclick: on_send_otp.clone(),
                            if is_loading() { "Sending OTP..." } else { "Send OTP" }
                        }
                    } else {
                        div {
                            class: "signin-field",
                            label { "Enter OTP" }
                            input {
                                r#type: "text",
                                placeholder: "Enter 6-digit OTP",
                                maxlength: "6",
                                value: otp(),
                                oninput: move |evt: FormEvent| otp.set(evt.value()),
                            }
                        }
                        button {
                            class: "signin-button",
                            disabled: is_loading(),
                            onclick: on_verify_otp,
                            if is_loading() { "Verifying..." } else { "Verify OTP" }
                        }
                        button {
                            class: "signin-resend",
                            disabled: is_loading(),
                            onclick: on_send_otp,
                            "Resend OTP"
                        }
                    }
                }

                p {
                    class: "signin-footnote",
                    if is_verified() {
                        "Welcome back! You can login directly with your email."
                    } else {
                        "First time user? We'll send you an OTP to verify your email."
                    }
                }
            }
        }
    }
}
