//! Error types for the user system
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("Username already exists: {username}")]
    UsernameAlreadyExists { username: String },

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("No active session")]
    NoActiveSession,

    #[error("Invalid username: {reason}")]
    InvalidUsername { reason: String },

    #[error("Invalid password: {reason}")]
    InvalidPassword { reason: String },
}

impl UserError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::UserNotFound { .. })
    }

    /// Check if this error is a failed or missing login.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            UserError::InvalidCredentials | UserError::NoActiveSession
        )
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
