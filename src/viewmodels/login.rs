use crate::models::{LoginRequest, Role};

#[derive(Clone, PartialEq, Debug)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for LoginDraft {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role: Role::Student,
        }
    }
}

impl LoginDraft {
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Please fill in email and password".to_string());
        }
        if !email.contains('@') {
            return Err("Enter a valid email address".to_string());
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_email_but_not_password() {
        let draft = LoginDraft {
            email: "  prof@uni.edu ".to_string(),
            password: " secret ".to_string(),
            role: Role::Faculty,
        };
        let request = draft.to_request().unwrap();
        assert_eq!(request.email, "prof@uni.edu");
        assert_eq!(request.password, " secret ");
        assert_eq!(request.role, Role::Faculty);
    }

    #[test]
    fn rejects_blank_or_malformed_input() {
        assert!(LoginDraft::default().to_request().is_err());
        let draft = LoginDraft {
            email: "student".to_string(),
            password: "pw".to_string(),
            ..LoginDraft::default()
        };
        assert_eq!(draft.to_request().unwrap_err(), "Enter a valid email address");
    }
}
