use dioxus::prelude::*;

use store::LogEntry;
use ui::icons::{FaClipboardList, FaMagnifyingGlass};
use ui::Icon;

/// Searchable, sortable log list shared by the three log pages.
#[component]
pub fn LogBrowser(logs: Vec<LogEntry>, show_email: bool) -> Element {
    let mut search = use_signal(String::new);
    let mut latest_first = use_signal(|| true);

    let term = search().to_lowercase();
    let mut shown: Vec<LogEntry> = logs
        .iter()
        .filter(|log| log.action.to_lowercase().contains(&term))
        .cloned()
        .collect();
    shown.sort_by(|a, b| {
        if latest_first() {
            b.timestamp.cmp(&a.timestamp)
        } else {
            a.timestamp.cmp(&b.timestamp)
        }
    });

    rsx! {
        div {
            class: "log-toolbar",
            div {
                class: "log-search",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "text",
                    placeholder: "Search logs...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
            }
            select {
                value: if latest_first() { "latest" } else { "oldest" },
                onchange: move |evt: FormEvent| latest_first.set(evt.value() == "latest"),
                option { value: "latest", "Latest" }
                option { value: "oldest", "Oldest" }
            }
        }

        if shown.is_empty() {
            div {
                class: "log-empty",
                Icon { icon: FaClipboardList, width: 48, height: 48 }
                p { "No logs found." }
            }
        } else {
            div {
                class: "log-list",
                for log in shown {
                    {
                        let when = log.timestamp.format("%b %e, %Y %H:%M:%S").to_string();
                        let who = if show_email {
                            log.user_email.clone().unwrap_or_default()
                        } else {
                            log.admin_id.clone().unwrap_or_default()
                        };
                        rsx! {
                            div {
                                key: "{log.id}",
                                class: "log-card",
                                div {
                                    class: "log-card-header",
                                    Icon { icon: FaClipboardList, width: 18, height: 18 }
                                    h3 { "{log.action}" }
                                }
                                p { class: "log-card-time", "{when}" }
                                if !who.is_empty() {
                                    p { class: "log-card-who", "{who}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
