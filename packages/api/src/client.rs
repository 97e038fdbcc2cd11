//! Typed HTTP client over the backend's REST surface.
//!
//! One [`ApiClient`] lives for the whole app (provided through Dioxus
//! context); it is cheap to clone. Authenticated endpoints carry the
//! session's bearer token plus an `email` header, matching what the backend
//! expects.

use serde::{Deserialize, Serialize};
use store::{LogEntry, Report, ReportType, User};

use crate::config::AppConfig;
use crate::endpoints;
use crate::error::ApiError;
use crate::notifications::ReportsGateway;
use crate::signin::{AuthGateway, DirectLoginRequest, SendOtpRequest, VerifyOtpRequest};

/// A new lost/found listing, as posted by the report form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub report_type: ReportType,
    pub item_name: String,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Profile fields a user may edit.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Contact-form submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClaimRequest<'a> {
    report_id: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportActionRequest<'a> {
    report_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewAdminLog<'a> {
    admin_id: &'a str,
    action: &'a str,
    timestamp: String,
}

#[derive(Deserialize)]
struct VerificationStatus {
    verified: bool,
}

#[derive(Deserialize)]
struct AuthResponse {
    user: User,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client bound to one backend origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        // Browser builds inherit the agent's own timeout handling.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(15));
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        endpoints::url(&self.config.base_url, endpoint)
    }

    fn authed(&self, request: reqwest::RequestBuilder, viewer: &User) -> reqwest::RequestBuilder {
        request
            .bearer_auth(&viewer.token)
            .header("email", &viewer.email)
    }

    // --- reports ---

    /// All reports, public listing.
    pub async fn all_reports(&self) -> Result<Vec<Report>, ApiError> {
        let response = self.http.get(self.url(endpoints::reports::BASE)).send().await?;
        parse(response).await
    }

    /// The current user's own reports.
    pub async fn user_reports(&self, viewer: &User) -> Result<Vec<Report>, ApiError> {
        let request = self.http.get(self.url(endpoints::reports::USER_REPORTS));
        let response = self.authed(request, viewer).send().await?;
        parse(response).await
    }

    pub async fn create_report(&self, viewer: &User, report: &NewReport) -> Result<(), ApiError> {
        let request = self.http.post(self.url(endpoints::reports::BASE)).json(report);
        let response = self.authed(request, viewer).send().await?;
        expect_ok(response).await
    }

    /// Claim a found item for the signed-in user.
    pub async fn claim_report(&self, viewer: &User, report_id: &str) -> Result<(), ApiError> {
        let body = ClaimRequest {
            report_id,
            email: &viewer.email,
        };
        let request = self.http.post(self.url(endpoints::reports::CLAIM)).json(&body);
        let response = self.authed(request, viewer).send().await?;
        expect_ok(response).await
    }

    /// Admin: approve a claim.
    pub async fn verify_claim(&self, viewer: &User, report_id: &str) -> Result<(), ApiError> {
        let body = ReportActionRequest { report_id };
        let request = self.http.post(self.url(endpoints::reports::VERIFY)).json(&body);
        let response = self.authed(request, viewer).send().await?;
        expect_ok(response).await
    }

    /// Admin: reject a claim, returning the report to unclaimed.
    pub async fn reset_claim(&self, viewer: &User, report_id: &str) -> Result<(), ApiError> {
        let body = ReportActionRequest { report_id };
        let request = self.http.post(self.url(endpoints::reports::RESET)).json(&body);
        let response = self.authed(request, viewer).send().await?;
        expect_ok(response).await
    }

    // --- logs ---

    pub async fn user_logs(&self, viewer: &User) -> Result<Vec<LogEntry>, ApiError> {
        let request = self
            .http
            .get(self.url(endpoints::logs::USER_LOGS))
            .query(&[("userId", viewer.id.as_str())]);
        let response = self.authed(request, viewer).send().await?;
        parse(response).await
    }

    pub async fn admin_logs(&self, viewer: &User) -> Result<Vec<LogEntry>, ApiError> {
        let request = self
            .http
            .get(self.url(endpoints::logs::ADMIN_LOGS))
            .header("email", &viewer.email);
        let response = request.send().await?;
        parse(response).await
    }

    /// Append an audit entry on behalf of `user`. Callers treat this as
    /// best-effort; logout in particular proceeds whether or not it lands.
    pub async fn append_admin_log(&self, user: &User, action: &str) -> Result<(), ApiError> {
        let body = NewAdminLog {
            admin_id: &user.id,
            action,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        let response = self
            .http
            .post(self.url(endpoints::logs::ADMIN_LOGS))
            .header("email", &user.email)
            .json(&body)
            .send()
            .await?;
        expect_ok(response).await
    }

    // --- users / contact ---

    /// Update profile fields. The response body is not relied upon; callers
    /// merge the edit locally and re-persist the session copy.
    pub async fn update_profile(
        &self,
        viewer: &User,
        update: &UpdateProfileRequest,
    ) -> Result<(), ApiError> {
        let url = endpoints::update_user_url(&self.config.base_url, &viewer.id);
        let response = self.http.put(url).json(update).send().await?;
        expect_ok(response).await
    }

    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(endpoints::CONTACT))
            .json(message)
            .send()
            .await?;
        expect_ok(response).await
    }
}

impl AuthGateway for ApiClient {
    async fn check_verification(&self, email: &str) -> Result<bool, ApiError> {
        let url = endpoints::check_verification_url(&self.config.base_url, email);
        let response = self.http.get(url).send().await?;
        let status: VerificationStatus = parse(response).await?;
        Ok(status.verified)
    }

    async fn send_otp(&self, request: &SendOtpRequest) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(endpoints::auth::SEND_OTP))
            .json(request)
            .send()
            .await?;
        expect_ok(response).await
    }

    async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<User, ApiError> {
        let response = self
            .http
            .post(self.url(endpoints::auth::VERIFY_OTP))
            .json(request)
            .send()
            .await?;
        let auth: AuthResponse = parse(response).await?;
        Ok(auth.user)
    }

    async fn direct_login(&self, request: &DirectLoginRequest) -> Result<User, ApiError> {
        let response = self
            .http
            .post(self.url(endpoints::auth::DIRECT_LOGIN))
            .json(request)
            .send()
            .await?;
        let auth: AuthResponse = parse(response).await?;
        Ok(auth.user)
    }
}

impl ReportsGateway for ApiClient {
    async fn list_reports(&self, viewer: &User) -> Result<Vec<Report>, ApiError> {
        let request = self.http.get(self.url(endpoints::reports::BASE));
        let response = self.authed(request, viewer).send().await?;
        parse(response).await
    }

    async fn mark_read(&self, viewer: &User, report_id: &str) -> Result<(), ApiError> {
        let url = endpoints::notification_read_url(&self.config.base_url, report_id);
        let request = self.http.put(url).json(&serde_json::json!({}));
        let response = self.authed(request, viewer).send().await?;
        expect_ok(response).await
    }
}

async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(backend_error(response).await)
    }
}

async fn expect_ok(response: reqwest::Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(backend_error(response).await)
    }
}

async fn backend_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Backend { status, message }
}
