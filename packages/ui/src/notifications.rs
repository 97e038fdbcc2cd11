//! Notification feed hook.
//!
//! One sync pass runs when the shell mounts with an authenticated session
//! and again whenever the identity changes. Failures degrade to an empty
//! feed; nothing here is surfaced to the user beyond the badge count.

use dioxus::prelude::*;

use api::{ApiClient, NotificationFeed};

use crate::auth::use_session;

/// Provide the shared feed signal and start the sync. Call once from the
/// shell; descendants read it with [`use_notification_feed`].
pub fn provide_notification_feed() -> Signal<NotificationFeed> {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let mut feed = use_signal(NotificationFeed::default);

    let _sync = use_resource(move || {
        let client = client.clone();
        async move {
            let Some(user) = session().current_user().cloned() else {
                feed.set(NotificationFeed::default());
                return;
            };
            match api::sync_notifications(&client, &user).await {
                Ok(synced) => feed.set(synced),
                Err(err) => {
                    tracing::warn!("notification sync failed: {err}");
                    feed.set(NotificationFeed::default());
                }
            }
        }
    });

    use_context_provider(|| feed);
    feed
}

pub fn use_notification_feed() -> Signal<NotificationFeed> {
    use_context::<Signal<NotificationFeed>>()
}
