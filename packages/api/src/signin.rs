//! # Sign-in flow — OTP enrollment and direct login
//!
//! The flow is a thin orchestrator over two seams:
//!
//! - [`AuthGateway`] — the four backend auth operations, implemented by
//!   [`crate::ApiClient`];
//! - [`Attestor`] — the bot-check widget, implemented by the reCAPTCHA
//!   bindings in the `ui` crate.
//!
//! Every auth-mutating attempt runs the same sequence: validate locally,
//! acquire a fresh single-use attestation token, derive the role hint from
//! the configured allow-list, then make exactly one backend call. If token
//! acquisition fails the attempt aborts with zero backend calls. Attempts
//! are independent and safe to repeat ("resend OTP" just runs the send step
//! again with its own token).
//!
//! Adopting the returned [`User`] into the session (memory + durable copy +
//! logged-in flag) is the caller's job via `store::SessionStore::login`.

use serde::Serialize;
use store::{Role, User};

use crate::config::AppConfig;
use crate::error::ApiError;

/// Action label the attestation widget scopes its tokens to.
pub const ATTESTATION_ACTION: &str = "login";

/// Single-use proof that the attempt originated from a human-driven browser.
pub trait Attestor {
    async fn attest(&self, action: &str) -> Result<String, ApiError>;
}

/// The backend's auth surface.
pub trait AuthGateway {
    async fn check_verification(&self, email: &str) -> Result<bool, ApiError>;
    async fn send_otp(&self, request: &SendOtpRequest) -> Result<(), ApiError>;
    async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<User, ApiError>;
    async fn direct_login(&self, request: &DirectLoginRequest) -> Result<User, ApiError>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    pub email: String,
    pub role: Role,
    pub recaptcha_token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
    pub role: Role,
    pub recaptcha_token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectLoginRequest {
    pub email: String,
    pub role: Role,
    pub recaptcha_token: String,
}

/// One sign-in attempt pipeline. Construct per use; holds no state.
pub struct SigninFlow<'a, G, A> {
    gateway: &'a G,
    attestor: &'a A,
    config: &'a AppConfig,
}

impl<'a, G: AuthGateway, A: Attestor> SigninFlow<'a, G, A> {
    pub fn new(gateway: &'a G, attestor: &'a A, config: &'a AppConfig) -> Self {
        Self {
            gateway,
            attestor,
            config,
        }
    }

    /// Ask the backend whether this email already completed OTP enrollment.
    pub async fn check_verification(&self, email: &str) -> Result<bool, ApiError> {
        self.gateway.check_verification(email).await
    }

    /// Dispatch an OTP to the given email. Also serves as "resend".
    pub async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        if email.is_empty() {
            return Err(ApiError::Validation("Please enter your email"));
        }
        let token = self.fresh_token().await?;
        let request = SendOtpRequest {
            email: email.to_string(),
            role: self.config.role_for(email),
            recaptcha_token: token,
        };
        self.gateway.send_otp(&request).await
    }

    /// Confirm the emailed code. Success yields the backend-issued user.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<User, ApiError> {
        if email.is_empty() {
            return Err(ApiError::Validation("Please enter your email"));
        }
        if otp.is_empty() {
            return Err(ApiError::Validation("Please enter the OTP"));
        }
        let token = self.fresh_token().await?;
        let request = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
            role: self.config.role_for(email),
            recaptcha_token: token,
        };
        self.gateway.verify_otp(&request).await
    }

    /// Login without an OTP, for emails whose enrollment is already
    /// complete. Reachability (only when the verification check returned
    /// true) is the view's concern; the backend enforces it regardless.
    pub async fn direct_login(&self, email: &str) -> Result<User, ApiError> {
        if email.is_empty() {
            return Err(ApiError::Validation("Please enter your email"));
        }
        let token = self.fresh_token().await?;
        let request = DirectLoginRequest {
            email: email.to_string(),
            role: self.config.role_for(email),
            recaptcha_token: token,
        };
        self.gateway.direct_login(&request).await
    }

    async fn fresh_token(&self) -> Result<String, ApiError> {
        let token = self.attestor.attest(ATTESTATION_ACTION).await?;
        if token.is_empty() {
            return Err(ApiError::Attestation("widget returned an empty token".into()));
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use store::{keys, KvStore, MemoryKv, SessionStore};

    #[derive(Default)]
    struct FakeGateway {
        checks: Mutex<Vec<String>>,
        sends: Mutex<Vec<SendOtpRequest>>,
        verifies: Mutex<Vec<VerifyOtpRequest>>,
        logins: Mutex<Vec<DirectLoginRequest>>,
    }

    impl FakeGateway {
        fn total_calls(&self) -> usize {
            self.checks.lock().unwrap().len()
                + self.sends.lock().unwrap().len()
                + self.verifies.lock().unwrap().len()
                + self.logins.lock().unwrap().len()
        }
    }

    fn issued_user(email: &str, role: Role) -> User {
        User {
            id: "u1".into(),
            email: email.into(),
            first_name: Some("Ada".into()),
            last_name: None,
            role,
            token: "bearer-1".into(),
            verified: true,
        }
    }

    impl AuthGateway for FakeGateway {
        async fn check_verification(&self, email: &str) -> Result<bool, ApiError> {
            self.checks.lock().unwrap().push(email.to_string());
            Ok(true)
        }

        async fn send_otp(&self, request: &SendOtpRequest) -> Result<(), ApiError> {
            self.sends.lock().unwrap().push(request.clone());
            Ok(())
        }

        async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<User, ApiError> {
            self.verifies.lock().unwrap().push(request.clone());
            Ok(issued_user(&request.email, request.role))
        }

        async fn direct_login(&self, request: &DirectLoginRequest) -> Result<User, ApiError> {
            self.logins.lock().unwrap().push(request.clone());
            Ok(issued_user(&request.email, request.role))
        }
    }

    /// Issues `"token-1"`, `"token-2"`, ... so tests can see freshness.
    #[derive(Default)]
    struct CountingAttestor {
        issued: Mutex<u32>,
    }

    impl Attestor for CountingAttestor {
        async fn attest(&self, action: &str) -> Result<String, ApiError> {
            assert_eq!(action, ATTESTATION_ACTION);
            let mut issued = self.issued.lock().unwrap();
            *issued += 1;
            Ok(format!("token-{issued}"))
        }
    }

    struct FailingAttestor;

    impl Attestor for FailingAttestor {
        async fn attest(&self, _action: &str) -> Result<String, ApiError> {
            Err(ApiError::Attestation("widget unavailable".into()))
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            admin_emails: vec!["dean@campus.edu".to_string()],
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn send_otp_carries_role_hint_and_token() {
        let gateway = FakeGateway::default();
        let attestor = CountingAttestor::default();
        let config = config();
        let flow = SigninFlow::new(&gateway, &attestor, &config);

        flow.send_otp("dean@campus.edu").await.unwrap();
        flow.send_otp("student@campus.edu").await.unwrap();

        let sends = gateway.sends.lock().unwrap();
        assert_eq!(sends[0].role, Role::Admin);
        assert_eq!(sends[0].recaptcha_token, "token-1");
        assert_eq!(sends[1].role, Role::User);
        assert_eq!(sends[1].recaptcha_token, "token-2");
    }

    #[tokio::test]
    async fn attestation_failure_makes_no_backend_call() {
        let gateway = FakeGateway::default();
        let config = config();
        let flow = SigninFlow::new(&gateway, &FailingAttestor, &config);

        assert!(matches!(
            flow.send_otp("student@campus.edu").await,
            Err(ApiError::Attestation(_))
        ));
        assert!(matches!(
            flow.verify_otp("student@campus.edu", "123456").await,
            Err(ApiError::Attestation(_))
        ));
        assert!(matches!(
            flow.direct_login("student@campus.edu").await,
            Err(ApiError::Attestation(_))
        ));
        assert_eq!(gateway.total_calls(), 0);
    }

    #[tokio::test]
    async fn validation_failure_skips_attestation_too() {
        let gateway = FakeGateway::default();
        let attestor = CountingAttestor::default();
        let config = config();
        let flow = SigninFlow::new(&gateway, &attestor, &config);

        assert!(matches!(
            flow.send_otp("").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            flow.verify_otp("a@x.edu", "").await,
            Err(ApiError::Validation(_))
        ));
        assert_eq!(gateway.total_calls(), 0);
        assert_eq!(*attestor.issued.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn resend_is_two_independent_attempts() {
        let gateway = FakeGateway::default();
        let attestor = CountingAttestor::default();
        let config = config();
        let flow = SigninFlow::new(&gateway, &attestor, &config);

        flow.send_otp("a@x.edu").await.unwrap();
        flow.send_otp("a@x.edu").await.unwrap();

        let sends = gateway.sends.lock().unwrap();
        assert_eq!(sends.len(), 2);
        assert_ne!(sends[0].recaptcha_token, sends[1].recaptcha_token);
    }

    #[tokio::test]
    async fn verify_otp_yields_user_the_session_adopts() {
        let gateway = FakeGateway::default();
        let attestor = CountingAttestor::default();
        let config = config();
        let flow = SigninFlow::new(&gateway, &attestor, &config);

        let user = flow.verify_otp("a@x.edu", "424242").await.unwrap();

        let kv = MemoryKv::new();
        let mut session = SessionStore::empty(kv.clone());
        session.login(user.clone());

        assert_eq!(session.current_user(), Some(&user));
        assert_eq!(kv.get(keys::LOGGED_IN).as_deref(), Some("true"));
        let stored: User = serde_json::from_str(&kv.get(keys::USER).unwrap()).unwrap();
        assert_eq!(stored, user);
    }

    #[tokio::test]
    async fn direct_login_posts_email_role_and_token() {
        let gateway = FakeGateway::default();
        let attestor = CountingAttestor::default();
        let config = config();
        let flow = SigninFlow::new(&gateway, &attestor, &config);

        let user = flow.direct_login("dean@campus.edu").await.unwrap();
        assert_eq!(user.role, Role::Admin);

        let logins = gateway.logins.lock().unwrap();
        assert_eq!(logins.len(), 1);
        assert_eq!(logins[0].email, "dean@campus.edu");
        assert_eq!(logins[0].role, Role::Admin);
        assert_eq!(logins[0].recaptcha_token, "token-1");
    }
}
