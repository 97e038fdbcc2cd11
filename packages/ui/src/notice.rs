//! Transient user-facing notices (toasts), stacked top-center and
//! auto-dismissed after a few seconds.

use dioxus::prelude::*;

const AUTO_DISMISS_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn push_notice(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    let mut state = notices.write();
    let id = state.next_id;
    state.next_id += 1;
    state.entries.push(Notice {
        id,
        level,
        message: message.to_string(),
    });
}

fn dismiss_notice(notices: &mut Signal<Notices>, id: u64) {
    notices.write().entries.retain(|notice| notice.id != id);
}

/// Renders the notice stack. Mount once, inside the shell.
#[component]
pub fn NoticeHost() -> Element {
    let notices = use_notices();
    let entries = notices().entries.clone();

    rsx! {
        div {
            class: "notice-host",
            for notice in entries {
                NoticeItem { key: "{notice.id}", notice: notice.clone() }
            }
        }
    }
}

#[component]
fn NoticeItem(notice: Notice) -> Element {
    let mut notices = use_notices();
    let id = notice.id;

    use_future(move || async move {
        crate::sleep_ms(AUTO_DISMISS_MS).await;
        dismiss_notice(&mut notices, id);
    });

    rsx! {
        div {
            class: match notice.level {
                NoticeLevel::Error => "notice notice-error",
                NoticeLevel::Success => "notice notice-success",
                NoticeLevel::Info => "notice notice-info",
            },
            onclick: move |_| dismiss_notice(&mut notices, id),
            "{notice.message}"
        }
    }
}
