use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

/// Full-screen spinner shown while the shell is getting ready.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "loading-spinner",
            span {
                class: "loading-spinner-icon",
                Icon { icon: FaSpinner, width: 32, height: 32 }
            }
            span { class: "loading-spinner-label", "Loading..." }
        }
    }
}
