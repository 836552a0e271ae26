//! Registration and login DTOs.

use serde::{Deserialize, Serialize};

use mercato_core::services::AuthOutcome;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub name: String,
    pub username: String,
    pub access_token: String,
}

impl From<AuthOutcome> for AuthData {
    fn from(outcome: AuthOutcome) -> Self {
        Self {
            name: outcome.name,
            username: outcome.username,
            access_token: outcome.access_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_data_wire_names() {
        let data = AuthData {
            name: "Seller One".to_string(),
            username: "seller1".to_string(),
            access_token: "jwt".to_string(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["accessToken"], "jwt");
        assert!(json.get("access_token").is_none());
    }
}
