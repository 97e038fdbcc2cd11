//! Well-known keys in the durable client store.

/// Serialized [`crate::User`] record of the signed-in session.
pub const USER: &str = "user";

/// `"true"` while a session is active. Redundant with the presence of
/// [`USER`]; an absent user always means logged out regardless of this flag.
pub const LOGGED_IN: &str = "isLoggedIn";

/// `"true"`/`"false"` dark-mode preference.
pub const DARK_MODE: &str = "darkMode";
