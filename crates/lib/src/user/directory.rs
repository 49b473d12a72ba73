//! Registered accounts keyed by username.

use std::collections::HashMap;

use super::{UserAccount, UserError};
use crate::constants::BUILTIN_USERS;

/// All registered accounts.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, UserAccount>,
}

impl UserDirectory {
    /// Creates a directory with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding the built-in administrator accounts.
    pub fn with_builtin_users() -> Self {
        let users = BUILTIN_USERS
            .iter()
            .map(|&(username, password)| {
                (
                    username.to_string(),
                    UserAccount::new(username, password, true),
                )
            })
            .collect();
        Self { users }
    }

    /// Adds a new account.
    ///
    /// Usernames are unique. Usernames and passwords must each be a single
    /// non-empty word, since login reads them as one token each.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<(), UserError> {
        if username.is_empty() || username.chars().any(char::is_whitespace) {
            return Err(UserError::InvalidUsername {
                reason: "username must be a single non-empty word".to_string(),
            });
        }
        if password.is_empty() || password.chars().any(char::is_whitespace) {
            return Err(UserError::InvalidPassword {
                reason: "password must be a single non-empty word".to_string(),
            });
        }
        if self.users.contains_key(username) {
            return Err(UserError::UsernameAlreadyExists {
                username: username.to_string(),
            });
        }

        self.users.insert(
            username.to_string(),
            UserAccount::new(username, password, is_admin),
        );
        tracing::info!(username, is_admin, "Registered user");
        Ok(())
    }

    /// Checks a username/password pair.
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&UserAccount, UserError> {
        match self.users.get(username) {
            Some(account) if account.password_matches(password) => Ok(account),
            _ => Err(UserError::InvalidCredentials),
        }
    }

    pub fn get(&self, username: &str) -> Option<&UserAccount> {
        self.users.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Registered usernames in sorted order.
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
