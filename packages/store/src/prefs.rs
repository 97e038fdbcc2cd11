//! Process-wide UI preference flags, persisted as `"true"`/`"false"` strings.

use crate::keys;
use crate::kv::KvStore;

/// Durable UI preference state, loaded once at process start.
///
/// `is_logged_in` is a redundant convenience flag; the session layer owns
/// its lifecycle and the presence of the stored user record is what actually
/// decides authentication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub is_logged_in: bool,
}

impl Preferences {
    pub fn load<K: KvStore>(kv: &K) -> Self {
        Self {
            dark_mode: read_flag(kv, keys::DARK_MODE),
            is_logged_in: read_flag(kv, keys::LOGGED_IN),
        }
    }

    /// Persist the dark-mode flag. The logged-in flag is written by the
    /// session store as part of login/logout, never from here.
    pub fn save_dark_mode<K: KvStore>(kv: &K, dark_mode: bool) {
        kv.set(keys::DARK_MODE, if dark_mode { "true" } else { "false" });
    }
}

fn read_flag<K: KvStore>(kv: &K, key: &str) -> bool {
    kv.get(key).as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    #[test]
    fn defaults_to_false_when_unset() {
        let kv = MemoryKv::new();
        assert_eq!(Preferences::load(&kv), Preferences::default());
    }

    #[test]
    fn dark_mode_round_trips_as_string() {
        let kv = MemoryKv::new();
        Preferences::save_dark_mode(&kv, true);
        assert_eq!(kv.get(keys::DARK_MODE).as_deref(), Some("true"));
        assert!(Preferences::load(&kv).dark_mode);

        Preferences::save_dark_mode(&kv, false);
        assert_eq!(kv.get(keys::DARK_MODE).as_deref(), Some("false"));
        assert!(!Preferences::load(&kv).dark_mode);
    }

    #[test]
    fn junk_values_read_as_false() {
        let kv = MemoryKv::new();
        kv.set(keys::DARK_MODE, "yes");
        assert!(!Preferences::load(&kv).dark_mode);
    }
}
