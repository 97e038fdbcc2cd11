pub mod keys;
pub mod models;
pub mod prefs;
pub mod session;

mod kv;
pub use kv::{KvStore, MemoryKv};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageKv;

pub use models::{LogEntry, Report, ReportType, Reporter, Role, User};
pub use prefs::Preferences;
pub use session::SessionStore;

/// Durable store backing the running platform.
///
/// Browser builds persist to `localStorage`; everywhere else (tests, native
/// tooling) an in-memory map stands in, so a fresh instance starts empty.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformKv = LocalStorageKv;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformKv = MemoryKv;

pub fn platform_kv() -> PlatformKv {
    PlatformKv::new()
}
