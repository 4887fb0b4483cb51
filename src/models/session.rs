//! Session display state: a cosmetic logged-in flag and display name.

use serde::{Deserialize, Serialize};

/// Non-authenticating session state used only for UI personalization.
///
/// Persisted independently of the job collection under camelCase keys.
/// Missing fields fall back to defaults so an older or partial payload
/// still hydrates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub is_logged_in: bool,
    pub user_name: String,
}

impl Session {
    /// Mark the session signed in under `name`.
    pub fn signed_in(name: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            user_name: name.into(),
        }
    }

    /// Display name with the generic fallback used across screens.
    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() {
            "User"
        } else {
            &self.user_name
        }
    }
}

/// Derive a display name from an email address, as the login flow does.
pub fn name_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();
    if local.is_empty() {
        "User".to_string()
    } else {
        local.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_from_email_takes_local_part() {
        assert_eq!(name_from_email("sam@example.com"), "sam");
        assert_eq!(name_from_email("  leen@jo.net "), "leen");
    }

    #[test]
    fn name_from_email_falls_back_for_degenerate_input() {
        assert_eq!(name_from_email(""), "User");
        assert_eq!(name_from_email("@example.com"), "User");
    }

    #[test]
    fn session_round_trips_with_camel_case_keys() {
        let session = Session::signed_in("Sam");

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"isLoggedIn\":true"));
        assert!(json.contains("\"userName\":\"Sam\""));

        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn partial_payload_hydrates_with_defaults() {
        let back: Session = serde_json::from_str("{\"isLoggedIn\":true}").unwrap();

        assert!(back.is_logged_in);
        assert_eq!(back.user_name, "");
        assert_eq!(back.display_name(), "User");
    }
}
