//! Single-slot login session.

use super::{UserDirectory, UserError};

/// The currently logged-in username, if any.
///
/// Only one user can be logged in at a time; a new login replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in `username` if the password matches.
    ///
    /// A failed attempt leaves the current session untouched.
    pub fn login(
        &mut self,
        directory: &UserDirectory,
        username: &str,
        password: &str,
    ) -> Result<(), UserError> {
        match directory.authenticate(username, password) {
            Ok(account) => {
                self.current = Some(account.username.clone());
                tracing::info!(username, "Logged in");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(username, "Login refused");
                Err(e)
            }
        }
    }

    /// Ends the session, returning who was logged in.
    pub fn logout(&mut self) -> Option<String> {
        let previous = self.current.take();
        if let Some(username) = &previous {
            tracing::info!(username = %username, "Logged out");
        }
        previous
    }

    /// Username of the active session.
    pub fn current_user(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the logged-in user has the admin flag.
    ///
    /// Fails with [`UserError::NoActiveSession`] when nobody is logged in.
    pub fn is_admin(&self, directory: &UserDirectory) -> Result<bool, UserError> {
        let username = self.current.as_deref().ok_or(UserError::NoActiveSession)?;
        directory
            .get(username)
            .map(|account| account.is_admin)
            .ok_or_else(|| UserError::UserNotFound {
                username: username.to_string(),
            })
    }
}
