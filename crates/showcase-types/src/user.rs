use serde::{Deserialize, Serialize};

use crate::ANONYMOUS_NAME;

/// Authenticated user's profile as returned by `GET /api/auth/profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl UserProfile {
    /// First and last name joined, falling back to a fixed anonymous label
    /// when both are empty.
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// Join first/last name, substituting the anonymous label for empty records.
pub fn join_name(first: &str, last: &str) -> String {
    let joined = format!("{} {}", first.trim(), last.trim());
    let joined = joined.trim();
    if joined.is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        joined.to_string()
    }
}

/// Request body for `POST /api/auth/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
    pub city: String,
    pub country: String,
}

impl SignupRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password1: impl Into<String>,
        password2: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password1: password1.into(),
            password2: password2.into(),
            city: city.into(),
            country: "Colombia".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_first_and_last() {
        let profile = UserProfile {
            first_name: "Ana".to_string(),
            last_name: "Ríos".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "Ana Ríos");
    }

    #[test]
    fn display_name_falls_back_when_empty() {
        let profile = UserProfile::default();
        assert_eq!(profile.display_name(), ANONYMOUS_NAME);
    }

    #[test]
    fn display_name_trims_single_sided_names() {
        assert_eq!(join_name("Ana", ""), "Ana");
        assert_eq!(join_name("", "Ríos"), "Ríos");
    }

    #[test]
    fn signup_defaults_country() {
        let req = SignupRequest::new("Ana", "Ríos", "a@b.co", "pw", "pw", "Cali");
        assert_eq!(req.country, "Colombia");
    }

    #[test]
    fn profile_tolerates_missing_fields() {
        let profile: UserProfile = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(profile.email, "a@b.co");
        assert_eq!(profile.first_name, "");
    }
}
