//! Core data types for the user system

/// A registered account.
///
/// The username is the unique key in the [`UserDirectory`](super::UserDirectory).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAccount {
    pub username: String,

    /// Plain-text password, compared byte for byte on login.
    pub password: String,

    pub is_admin: bool,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            is_admin,
        }
    }

    /// Case-sensitive exact comparison.
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}
