//! Top navigation bar: route links, notification bell with unread badge,
//! dark-mode toggle, and the user menu with the ordered logout sequence.

use dioxus::prelude::*;

use api::ApiClient;
use store::Role;
use ui::icons::{FaBell, FaMoon, FaSun};
use ui::{
    persist_theme, push_notice, use_notices, use_notification_feed, use_session, use_theme, Icon,
    NoticeLevel,
};

use crate::Route;

#[component]
pub fn NavBar() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut dark_mode = use_theme();
    let mut notices = use_notices();
    let feed = use_notification_feed();
    let nav = use_navigator();
    let mut dropdown_open = use_signal(|| false);

    let user = session().current_user().cloned();
    let unread = feed().unread_count;

    let on_toggle_theme = move |_| {
        let next = !dark_mode();
        dark_mode.set(next);
        persist_theme(next);
    };

    let on_logout = {
        let client = client.clone();
        move |_| {
            dropdown_open.set(false);
            let client = client.clone();
            spawn(async move {
                ui::perform_logout(session, &client).await;
                push_notice(&mut notices, NoticeLevel::Success, "Logged out successfully");
                nav.push(Route::Home {});
            });
        }
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                Link { to: Route::Home {}, class: "navbar-logo", "Lost & Found" }
            }

            div {
                class: "navbar-links",
                Link { to: Route::Home {}, class: "nav-link", "HOME" }
                Link { to: Route::LostItems {}, class: "nav-link", "LOST ITEMS" }
                Link { to: Route::FoundItems {}, class: "nav-link", "FOUND ITEMS" }
                Link { to: Route::Report {}, class: "nav-link", "REPORT" }
                if user.as_ref().is_some_and(|u| u.role == Role::User) {
                    Link { to: Route::ContactUs {}, class: "nav-link", "CONTACT US" }
                }
                if user.as_ref().is_some_and(|u| u.role == Role::Admin) {
                    Link { to: Route::VerificationPage {}, class: "nav-link", "VERIFICATION" }
                }
            }

            div {
                class: "navbar-icons",
                button {
                    class: "navbar-bell",
                    title: "Notifications",
                    onclick: move |_| { nav.push(Route::Notifications {}); },
                    Icon { icon: FaBell, width: 20, height: 20 }
                    if unread > 0 {
                        span { class: "navbar-bell-badge", "{unread}" }
                    }
                }
                button {
                    class: "navbar-theme-toggle",
                    title: "Toggle dark mode",
                    onclick: on_toggle_theme,
                    if dark_mode() {
                        Icon { icon: FaSun, width: 20, height: 20 }
                    } else {
                        Icon { icon: FaMoon, width: 20, height: 20 }
                    }
                }

                if let Some(user) = user {
                    div {
                        class: "navbar-user",
                        button {
                            class: "navbar-user-box",
                            onclick: move |_| {
                                let open = dropdown_open();
                                dropdown_open.set(!open);
                            },
                            span { class: "navbar-user-initials", "{user.initials()}" }
                            span { class: "navbar-user-name", b { "{user.display_name()}" } }
                        }
                        if dropdown_open() {
                            div {
                                class: "dropdown-menu",
                                Link {
                                    to: Route::EditProfile {},
                                    class: "dropdown-item",
                                    onclick: move |_| dropdown_open.set(false),
                                    "Edit Profile"
                                }
                                if user.role != Role::Admin {
                                    Link {
                                        to: Route::MyListings {},
                                        class: "dropdown-item",
                                        onclick: move |_| dropdown_open.set(false),
                                        "My Reports"
                                    }
                                }
                                if user.role == Role::Admin {
                                    Link {
                                        to: Route::AdminLogs {},
                                        class: "dropdown-item",
                                        onclick: move |_| dropdown_open.set(false),
                                        "Admin Logs"
                                    }
                                    Link {
                                        to: Route::AllUsersLogs {},
                                        class: "dropdown-item",
                                        onclick: move |_| dropdown_open.set(false),
                                        "All Users Logs"
                                    }
                                } else {
                                    Link {
                                        to: Route::UserLogs {},
                                        class: "dropdown-item",
                                        onclick: move |_| dropdown_open.set(false),
                                        "User Logs"
                                    }
                                }
                                button {
                                    class: "dropdown-item dropdown-logout",
                                    onclick: on_logout,
                                    "Logout"
                                }
                            }
                        }
                    }
                } else {
                    Link { to: Route::Signin {}, class: "navbar-signin", "Sign In" }
                }
            }
        }
    }
}
