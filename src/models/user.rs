//! User model for the session and the mock user table.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Badge, SustainabilityImpact};

/// Points granted to every new account.
pub const WELCOME_BONUS_POINTS: u32 = 100;

/// Identity record held by the session and persisted under `rewear_user`.
///
/// Carries no credential; see [`UserRecord`] for the table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Unique across the user table (exact, case-sensitive)
    pub email: String,
    pub username: String,
    pub points: u32,
    /// Join date ("YYYY-MM-DD")
    pub join_date: String,
    pub is_admin: bool,
    /// One entry per catalog badge, in catalog order
    pub badges: Vec<Badge>,
    pub sustainability_impact: SustainabilityImpact,
}

/// A row of the mock user table: a user plus their secret password.
///
/// Not `Serialize`: the password never reaches storage.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password: String,
}

impl UserRecord {
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: password.into(),
        }
    }

    /// Check an exact email and password match.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email == email && self.password == password
    }

    /// Strip the credential, leaving the sanitized user.
    pub fn into_user(self) -> User {
        self.user
    }
}

/// Partial user fields for a shallow merge. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub email: Option<String>,
    pub username: Option<String>,
    pub points: Option<u32>,
    pub join_date: Option<String>,
    pub is_admin: Option<bool>,
    pub badges: Option<Vec<Badge>>,
    pub sustainability_impact: Option<SustainabilityImpact>,
}

impl UserUpdate {
    /// Update that only sets the point balance.
    pub fn points(points: u32) -> Self {
        Self {
            points: Some(points),
            ..Default::default()
        }
    }

    /// Apply every present field to `user`. Values are not validated.
    pub fn apply_to(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(points) = self.points {
            user.points = points;
        }
        if let Some(join_date) = self.join_date {
            user.join_date = join_date;
        }
        if let Some(is_admin) = self.is_admin {
            user.is_admin = is_admin;
        }
        if let Some(badges) = self.badges {
            user.badges = badges;
        }
        if let Some(impact) = self.sustainability_impact {
            user.sustainability_impact = impact;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::badge::catalog_badges;

    fn make_user() -> User {
        User {
            id: "42".to_string(),
            email: "someone@example.com".to_string(),
            username: "Someone".to_string(),
            points: 100,
            join_date: "2024-02-01".to_string(),
            is_admin: false,
            badges: catalog_badges(),
            sustainability_impact: SustainabilityImpact::default(),
        }
    }

    #[test]
    fn test_user_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(make_user()).unwrap();
        for key in [
            "id",
            "email",
            "username",
            "points",
            "joinDate",
            "isAdmin",
            "badges",
            "sustainabilityImpact",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_record_matches_exactly() {
        let record = UserRecord::new(make_user(), "hunter22");
        assert!(record.matches("someone@example.com", "hunter22"));
        assert!(!record.matches("Someone@example.com", "hunter22"));
        assert!(!record.matches("someone@example.com", "Hunter22"));
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut user = make_user();
        let before = user.clone();

        UserUpdate {
            username: Some("Renamed".to_string()),
            ..Default::default()
        }
        .apply_to(&mut user);

        assert_eq!(user.username, "Renamed");
        assert_eq!(user.points, before.points);
        assert_eq!(user.badges, before.badges);
        assert_eq!(user.email, before.email);
    }
}
