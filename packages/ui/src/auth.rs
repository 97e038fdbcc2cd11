//! Session context and hooks for the UI.
//!
//! The [`SessionStore`] itself lives in a signal provided at the app root;
//! views read it through [`use_session`]. Hydration happens synchronously
//! from durable storage when the provider mounts, with no backend
//! revalidation — a restored session is trusted until a call rejects it.

use dioxus::prelude::*;

use api::ApiClient;
use store::{PlatformKv, SessionStore, User};

/// The session store type as it exists on the running platform.
pub type Session = SessionStore<PlatformKv>;

/// Get the current session. Updates when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session signal.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionStore::hydrate(store::platform_kv()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Adopt a backend-confirmed user: in-memory record, durable copy, and
/// logged-in flag, in one step.
pub fn complete_login(mut session: Signal<Session>, user: User) {
    session.write().login(user);
}

/// Ordered logout: read the durable copy first, best-effort append the
/// audit entry with that identity, then clear memory and storage. A failed
/// audit append never blocks the logout.
pub async fn perform_logout(mut session: Signal<Session>, client: &ApiClient) {
    let stored = session.peek().stored_user();
    if let Some(user) = stored {
        let action = format!("User Logged Out ({})", user.email);
        if let Err(err) = client.append_admin_log(&user, &action).await {
            tracing::warn!("logout audit append failed: {err}");
        }
    }
    session.write().logout();
}
