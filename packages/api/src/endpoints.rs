//! Endpoint registry: fixed path suffixes and URL builders.
//!
//! Paths are grouped the way the backend groups its routers. Everything is
//! a `const`, so an unknown endpoint is a compile error rather than a
//! runtime lookup miss.

pub mod auth {
    pub const SEND_OTP: &str = "/api/auth/send-otp";
    pub const VERIFY_OTP: &str = "/api/auth/verify-otp";
    pub const DIRECT_LOGIN: &str = "/api/auth/direct-login";
    pub const CHECK_VERIFICATION: &str = "/api/auth/check-verification";
}

pub mod reports {
    pub const BASE: &str = "/api/reports";
    pub const USER_REPORTS: &str = "/api/reports/user";
    pub const VERIFY: &str = "/api/reports/verify";
    pub const RESET: &str = "/api/reports/reset";
    pub const CLAIM: &str = "/api/reports/claim";
    pub const NOTIFICATION: &str = "/api/reports/notification";
}

pub mod users {
    pub const UPDATE: &str = "/api/users";
}

pub mod logs {
    pub const USER_LOGS: &str = "/api/logs/user-logs";
    pub const ADMIN_LOGS: &str = "/api/logs/admin-logs";
}

pub const CONTACT: &str = "/api/contact";

/// Absolute URL for a fixed endpoint path.
pub fn url(base: &str, endpoint: &str) -> String {
    format!("{base}{endpoint}")
}

/// `GET /api/auth/check-verification/{email}`
pub fn check_verification_url(base: &str, email: &str) -> String {
    format!("{base}{}/{email}", auth::CHECK_VERIFICATION)
}

/// `PUT /api/reports/notification/{id}/read`
pub fn notification_read_url(base: &str, report_id: &str) -> String {
    format!("{base}{}/{report_id}/read", reports::NOTIFICATION)
}

/// `PUT /api/users/{id}`
pub fn update_user_url(base: &str, user_id: &str) -> String {
    format!("{base}{}/{user_id}", users::UPDATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://backend.example.com";

    #[test]
    fn fixed_urls_concatenate_base_and_path() {
        assert_eq!(
            url(BASE, auth::SEND_OTP),
            "https://backend.example.com/api/auth/send-otp"
        );
        assert_eq!(
            url(BASE, logs::ADMIN_LOGS),
            "https://backend.example.com/api/logs/admin-logs"
        );
    }

    #[test]
    fn parameterized_urls() {
        assert_eq!(
            check_verification_url(BASE, "a@x.edu"),
            "https://backend.example.com/api/auth/check-verification/a@x.edu"
        );
        assert_eq!(
            notification_read_url(BASE, "r42"),
            "https://backend.example.com/api/reports/notification/r42/read"
        );
        assert_eq!(
            update_user_url(BASE, "u7"),
            "https://backend.example.com/api/users/u7"
        );
    }
}
