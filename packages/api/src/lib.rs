//! # API crate — HTTP client of the Lost & Found backend
//!
//! Everything the frontend needs to talk to the campus Lost & Found REST
//! backend, plus the client-side orchestration that sits directly on top of
//! the wire: the sign-in flow and the notification sync.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Injected client configuration: backend origin, admin allow-list, reCAPTCHA site key, role derivation |
//! | [`endpoints`] | Static endpoint paths and URL builders over the configured origin |
//! | [`error`] | [`ApiError`] — transport, backend-rejection, attestation, and validation failures |
//! | [`client`] | [`ApiClient`] — typed `reqwest` wrapper implementing the gateway traits |
//! | [`signin`] | OTP/direct-login state machine over the [`AuthGateway`]/[`Attestor`] seams |
//! | [`notifications`] | Visibility predicate, feed selection, and the mark-as-read fan-out |
//!
//! The gateway traits exist so the flows are testable with in-memory fakes;
//! [`ApiClient`] is the only production implementation.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod notifications;
pub mod signin;

pub use client::{ApiClient, ContactMessage, NewReport, UpdateProfileRequest};
pub use config::AppConfig;
pub use error::ApiError;
pub use notifications::{
    is_notification_for, select_notifications, sync_notifications, NotificationFeed,
    ReportsGateway,
};
pub use signin::{Attestor, AuthGateway, SigninFlow, ATTESTATION_ACTION};
