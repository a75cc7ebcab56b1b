// ============================================================================
// SESSION SLICE - who is logged in
// ============================================================================

use crate::models::{Role, SessionCredential};
use crate::state::resource::{Lifecycle, Resource};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionSlice {
    pub credential: Option<SessionCredential>,
    pub login: Resource<SessionCredential>,
    /// Set when the backend answered 401 and the credential was dropped
    pub expired: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Restored(SessionCredential),
    Login(Lifecycle<SessionCredential>),
    LoggedOut,
    Expired,
}

impl SessionSlice {
    pub fn role(&self) -> Option<Role> {
        self.credential.as_ref().map(|c| c.role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.credential.is_some()
    }

    pub fn reduce(&mut self, action: SessionAction) -> bool {
        match action {
            SessionAction::Restored(credential) => {
                self.credential = Some(credential);
                self.expired = false;
                true
            }
            SessionAction::Login(step) => {
                let credential = match &step {
                    Lifecycle::Fulfilled(_, credential) => Some(credential.clone()),
                    _ => None,
                };
                let applied = self.login.apply(step);
                if applied {
                    if let Some(credential) = credential {
                        self.credential = Some(credential);
                        self.expired = false;
                    }
                }
                applied
            }
            SessionAction::LoggedOut => {
                self.credential = None;
                self.expired = false;
                true
            }
            SessionAction::Expired => {
                self.credential = None;
                self.expired = true;
                true
            }
        }
    }
}
