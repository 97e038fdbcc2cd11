use dioxus::prelude::*;

use api::{ApiClient, AppConfig};
use ui::{LoadingSpinner, NoticeHost, SessionProvider};

use views::{
    AdminLogs, AllUsersLogs, ContactUs, EditProfile, FoundItems, Home, LostItems, MyListings,
    Notifications, Report, Signin, UserLogs, VerificationPage,
};

mod navbar;
mod views;

use navbar::NavBar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[redirect("/home", || Route::Home {})]
        #[route("/")]
        Home {},
        #[route("/signin")]
        Signin {},
        #[route("/notifications")]
        Notifications {},
        #[route("/Report")]
        Report {},
        #[route("/LostItems")]
        LostItems {},
        #[route("/FoundItems")]
        FoundItems {},
        #[route("/EditProfile")]
        EditProfile {},
        #[route("/MyListings")]
        MyListings {},
        #[route("/VerificationPage")]
        VerificationPage {},
        #[route("/ContactUs")]
        ContactUs {},
        #[route("/UserLogs")]
        UserLogs {},
        #[route("/AllUsersLogs")]
        AllUsersLogs {},
        #[route("/AdminLogs")]
        AdminLogs {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One HTTP client and one set of app-wide signals for the whole tree.
    use_context_provider(|| {
        ApiClient::new(AppConfig::default()).expect("failed to build the HTTP client")
    });
    let dark_mode: ui::ThemeSignal = use_signal(ui::load_theme_from_storage);
    use_context_provider(|| dark_mode);
    let notices = use_signal(ui::Notices::default);
    use_context_provider(|| notices);

    // Short gate so the first paint is the spinner, not a half-styled shell.
    let mut ready = use_signal(|| false);
    use_future(move || async move {
        ui::sleep_ms(1000).await;
        ready.set(true);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            if ready() {
                Router::<Route> {}
            } else {
                LoadingSpinner {}
            }
        }
    }
}

/// Layout wrapping every route: dark-mode scope, navbar, notice stack, and
/// the notification sync that feeds the navbar badge.
#[component]
fn Shell() -> Element {
    let dark_mode = ui::use_theme();
    ui::provide_notification_feed();

    rsx! {
        div {
            class: if dark_mode() { "app dark" } else { "app" },
            NavBar {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            NoticeHost {}
        }
    }
}
