use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn label(&self) -> String {
        self.display_name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Anonymous".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    Authenticated(Identity),
    #[default]
    Anonymous,
    Resolving,
}

impl AuthState {
    pub fn user(&self) -> Option<&Identity> {
        match self {
            AuthState::Authenticated(identity) => Some(identity),
            AuthState::Anonymous | AuthState::Resolving => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Resolving)
    }

    /// Signed in and done resolving, i.e. the login page should move on.
    pub fn should_leave_login(&self) -> bool {
        !self.is_loading() && self.user().is_some()
    }
}
