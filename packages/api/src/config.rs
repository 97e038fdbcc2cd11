//! Client configuration, injected once at startup.

use store::Role;

/// Static configuration for the running client.
///
/// The admin allow-list is a capability hint only — it decides which `role`
/// value rides along on auth requests and which admin screens are offered.
/// The backend independently authorizes every call; this list is never an
/// authorization boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST backend, no trailing slash.
    pub base_url: String,
    /// Emails that sign in with the admin role hint.
    pub admin_emails: Vec<String>,
    /// reCAPTCHA v3 site key for the attestation widget.
    pub recaptcha_site_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://backend-hrby.onrender.com".to_string(),
            admin_emails: vec![
                "kumarprasadaman1234@gmail.com".to_string(),
                "drizzle003.ace@gmail.com".to_string(),
            ],
            recaptcha_site_key: "6LcTo5QrAAAAAJRHYqu4QXmLfaYi8g5lpeLwbD9W".to_string(),
        }
    }
}

impl AppConfig {
    /// Role hint for an email: admin iff it exactly matches the allow-list.
    pub fn role_for(&self, email: &str) -> Role {
        if self.admin_emails.iter().any(|admin| admin == email) {
            Role::Admin
        } else {
            Role::User
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_listed_emails_are_admin() {
        let config = AppConfig::default();
        for email in &config.admin_emails {
            assert_eq!(config.role_for(email), Role::Admin);
        }
    }

    #[test]
    fn everyone_else_is_user() {
        let config = AppConfig::default();
        assert_eq!(config.role_for("student@ncuindia.edu"), Role::User);
        assert_eq!(config.role_for(""), Role::User);
        // Prefix/suffix variants of an admin email do not match.
        assert_eq!(
            config.role_for("kumarprasadaman1234@gmail.com "),
            Role::User
        );
    }

    #[test]
    fn allow_list_is_injectable() {
        let config = AppConfig {
            admin_emails: vec!["dean@campus.edu".to_string()],
            ..AppConfig::default()
        };
        assert_eq!(config.role_for("dean@campus.edu"), Role::Admin);
        assert_eq!(config.role_for("kumarprasadaman1234@gmail.com"), Role::User);
    }
}
