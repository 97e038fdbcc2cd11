//! This crate contains the shared UI building blocks for the workspace:
//! session context, theme handling, transient notices, and the notification
//! feed hook the navbar and notifications page both consume.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{complete_login, perform_logout, use_session, Session, SessionProvider};

mod theme;
pub use theme::{load_theme_from_storage, persist_theme, use_theme, ThemeSignal};

mod notice;
pub use notice::{push_notice, use_notices, Notice, NoticeHost, NoticeLevel, Notices};

mod notifications;
pub use notifications::{provide_notification_feed, use_notification_feed};

pub mod recaptcha;
pub use recaptcha::RecaptchaAttestor;

mod spinner;
pub use spinner::LoadingSpinner;

/// Await roughly `ms` milliseconds. Browser-only; elsewhere it returns
/// immediately, which is what the non-interactive builds want.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}
