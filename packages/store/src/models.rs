//! Wire-format domain records shared across the workspace.
//!
//! Field names follow the backend's JSON (`camelCase`, Mongo-style `_id`);
//! optional and defaulted fields absorb the partial documents older records
//! come back with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signed-in identity, issued by the backend on a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Opaque bearer credential attached to authenticated requests.
    #[serde(default)]
    pub token: String,
    /// Whether OTP enrollment is complete for this email.
    #[serde(default)]
    pub verified: bool,
}

impl User {
    /// Short display form for the navbar badge, e.g. `"AK"`.
    pub fn initials(&self) -> String {
        let mut out = String::new();
        if let Some(first) = self.first_name.as_deref().and_then(|n| n.chars().next()) {
            out.push(first);
        }
        if let Some(last) = self.last_name.as_deref().and_then(|n| n.chars().next()) {
            out.push(last);
        }
        out
    }

    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(f), Some(l)) => format!("{f} {l}"),
            (Some(f), None) => f.to_string(),
            _ => self.email.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Capability hint derived client-side; the backend is the authority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// A lost-or-found item listing. Owned by the backend; the client reads it
/// and only ever patches the per-viewer `read` flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    pub report_type: ReportType,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Reporter, embedded by the backend.
    pub user: Reporter,
    /// Claimant's email once somebody has claimed the item.
    #[serde(default)]
    pub claimed_by: Option<String>,
    /// Whether an admin has verified the claim.
    #[serde(default)]
    pub verified: bool,
    /// Per-viewer notification-read flag.
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Lost,
    Found,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Lost => "lost",
            ReportType::Found => "found",
        }
    }
}

/// Reporter identity embedded in a [`Report`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reporter {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Append-only audit record; the client reads these for display and appends
/// one on logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub admin_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_round_trips_wire_names() {
        let json = r#"{
            "_id": "u1",
            "email": "a@x.edu",
            "firstName": "Ada",
            "lastName": "Khan",
            "role": "admin",
            "token": "tok",
            "verified": true
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.initials(), "AK");

        let back = serde_json::to_string(&user).unwrap();
        assert!(back.contains("\"_id\":\"u1\""));
        assert!(back.contains("\"firstName\":\"Ada\""));
        assert!(back.contains("\"role\":\"admin\""));
    }

    #[test]
    fn partial_report_gets_defaults() {
        let json = r#"{
            "_id": "r1",
            "reportType": "found",
            "user": { "email": "b@x.edu" },
            "createdAt": "2024-03-01T10:00:00.000Z"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.report_type, ReportType::Found);
        assert!(report.claimed_by.is_none());
        assert!(!report.read);
        assert_eq!(report.item_name, "");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = User {
            id: "u2".into(),
            email: "c@x.edu".into(),
            first_name: None,
            last_name: None,
            role: Role::User,
            token: String::new(),
            verified: false,
        };
        assert_eq!(user.display_name(), "c@x.edu");
        assert_eq!(user.initials(), "");
    }
}
