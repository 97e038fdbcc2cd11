//! Dark-mode state, persisted to durable storage.

use dioxus::prelude::*;

use store::Preferences;

/// `true` while dark mode is on. Provided at the app root.
pub type ThemeSignal = Signal<bool>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Initial dark-mode value: the stored preference, default off.
pub fn load_theme_from_storage() -> bool {
    Preferences::load(&store::platform_kv()).dark_mode
}

pub fn persist_theme(dark_mode: bool) {
    Preferences::save_dark_mode(&store::platform_kv(), dark_mode);
}
