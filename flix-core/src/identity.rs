use flix_shared::Masked;
use serde::{Deserialize, Serialize};

/// The signed-in customer, as reported by `GET /user/check-session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Masked<String>,
    #[serde(default)]
    pub phone_number: Masked<String>,
    #[serde(default)]
    pub photo_path: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn email(&self) -> &str {
        self.email.inner()
    }
}

/// Result of the backend session check. Authentication correctness is
/// entirely the backend's responsibility; this type is never derived from
/// local token inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl SessionState {
    pub fn anonymous() -> Self {
        SessionState {
            is_logged_in: false,
            user: None,
        }
    }

    pub fn authenticated(user: User) -> Self {
        SessionState {
            is_logged_in: true,
            user: Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_session_response() {
        let json = r#"{
            "isLoggedIn": true,
            "user": {
                "id": 7,
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@example.com",
                "phoneNumber": "9999999999",
                "photoPath": ""
            }
        }"#;

        let session: SessionState = serde_json::from_str(json).unwrap();
        assert!(session.is_logged_in);
        let user = session.user.unwrap();
        assert_eq!(user.display_name(), "Jane Doe");
        assert_eq!(user.email(), "jane@example.com");
        // The email must not leak through Debug formatting.
        assert!(!format!("{:?}", user).contains("jane@example.com"));
    }

    #[test]
    fn parses_anonymous_session() {
        let session: SessionState = serde_json::from_str(r#"{"isLoggedIn": false}"#).unwrap();
        assert!(!session.is_logged_in);
        assert!(session.user.is_none());
    }
}
