//! # Session Store — the client-side holder of the signed-in identity
//!
//! [`SessionStore`] keeps the current [`User`] in memory and mirrors it to
//! durable storage so a reload stays signed in. Two keys are involved:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`keys::USER`] | the serialized `User` record |
//! | [`keys::LOGGED_IN`] | `"true"` while a session is active |
//!
//! The keys are written separately (no transaction); a torn state is benign
//! because an absent `User` is always treated as logged out, whatever the
//! flag says.
//!
//! Restored sessions are trusted as-is: [`SessionStore::hydrate`] performs no
//! backend freshness or revocation check, matching the original product
//! behavior. A stale token stays "logged in" client-side until the first
//! authenticated call is rejected.

use crate::keys;
use crate::kv::KvStore;
use crate::models::User;

/// Holds the current authenticated user and its durable mirror.
#[derive(Clone, Debug)]
pub struct SessionStore<K: KvStore> {
    kv: K,
    current: Option<User>,
}

impl<K: KvStore> SessionStore<K> {
    /// A store with no session, ignoring whatever durable state exists.
    pub fn empty(kv: K) -> Self {
        Self { kv, current: None }
    }

    /// Read the durable copy once and adopt it as the in-memory record.
    /// Absent or unparseable blobs yield a logged-out session.
    pub fn hydrate(kv: K) -> Self {
        let current = kv
            .get(keys::USER)
            .and_then(|blob| serde_json::from_str(&blob).ok());
        Self { kv, current }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the in-memory record only; `None` signifies logout without
    /// touching durable state.
    pub fn set_current_user(&mut self, user: Option<User>) {
        self.current = user;
    }

    /// Adopt a backend-confirmed user: set the in-memory record, persist the
    /// serialized copy, and raise the logged-in flag.
    pub fn login(&mut self, user: User) {
        if let Ok(blob) = serde_json::to_string(&user) {
            self.kv.set(keys::USER, &blob);
        }
        self.kv.set(keys::LOGGED_IN, "true");
        self.current = Some(user);
    }

    /// Fresh read of the durable copy, independent of the in-memory record.
    /// Logout reads this before clearing so the audit append still has the
    /// identity to report.
    pub fn stored_user(&self) -> Option<User> {
        self.kv
            .get(keys::USER)
            .and_then(|blob| serde_json::from_str(&blob).ok())
    }

    /// Clear the in-memory record, the durable copy, and the logged-in flag.
    pub fn logout(&mut self) {
        self.current = None;
        self.kv.remove(keys::USER);
        self.kv.remove(keys::LOGGED_IN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use crate::models::Role;

    fn sample_user() -> User {
        User {
            id: "u1".into(),
            email: "a@x.edu".into(),
            first_name: Some("Ada".into()),
            last_name: None,
            role: Role::User,
            token: "tok-1".into(),
            verified: true,
        }
    }

    #[test]
    fn login_persists_user_and_flag() {
        let kv = MemoryKv::new();
        let mut session = SessionStore::empty(kv.clone());

        session.login(sample_user());

        assert_eq!(session.current_user().map(|u| u.email.as_str()), Some("a@x.edu"));
        assert_eq!(kv.get(keys::LOGGED_IN).as_deref(), Some("true"));

        let stored: User = serde_json::from_str(&kv.get(keys::USER).unwrap()).unwrap();
        assert_eq!(stored, sample_user());
    }

    #[test]
    fn hydrate_restores_persisted_session() {
        let kv = MemoryKv::new();
        SessionStore::empty(kv.clone()).login(sample_user());

        let restored = SessionStore::hydrate(kv);
        assert_eq!(restored.current_user(), Some(&sample_user()));
        assert!(restored.is_logged_in());
    }

    #[test]
    fn hydrate_treats_corrupt_blob_as_logged_out() {
        let kv = MemoryKv::new();
        kv.set(keys::USER, "{not json");
        kv.set(keys::LOGGED_IN, "true");

        let session = SessionStore::hydrate(kv);
        assert!(session.current_user().is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn absent_user_is_logged_out_despite_flag() {
        let kv = MemoryKv::new();
        kv.set(keys::LOGGED_IN, "true");

        let session = SessionStore::hydrate(kv);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let kv = MemoryKv::new();
        let mut session = SessionStore::empty(kv.clone());
        session.login(sample_user());

        session.logout();

        assert!(session.current_user().is_none());
        assert!(kv.get(keys::USER).is_none());
        assert!(kv.get(keys::LOGGED_IN).is_none());
    }

    #[test]
    fn stored_user_reads_fresh_copy() {
        let kv = MemoryKv::new();
        let mut session = SessionStore::empty(kv.clone());
        session.login(sample_user());

        // In-memory record gone, durable copy still there.
        session.set_current_user(None);
        assert_eq!(session.stored_user(), Some(sample_user()));

        session.logout();
        assert!(session.stored_user().is_none());
    }
}
