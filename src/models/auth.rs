use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Portal role, as sent by the backend and stored in the `role` cookie
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Bearer token plus role. No expiry is tracked client-side.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredential {
    pub token: String,
    pub role: Role,
}

impl SessionCredential {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }
}

// Keep tokens out of logs
impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredential")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

impl From<LoginResponse> for SessionCredential {
    fn from(response: LoginResponse) -> Self {
        SessionCredential::new(response.token, response.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Faculty".parse::<Role>(), Ok(Role::Faculty));
        assert_eq!(" student ".parse::<Role>(), Ok(Role::Student));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn credential_debug_hides_token() {
        let credential = SessionCredential::new("secret-token", Role::Student);
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("Student"));
    }
}
