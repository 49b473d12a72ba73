//! User accounts and the login session.
//!
//! Accounts live in a [`UserDirectory`] keyed by username. Passwords are kept
//! and compared as plain text. A [`Session`] holds at most one logged-in
//! username at a time.

pub mod directory;
pub mod errors;
pub mod session;
pub mod types;

pub use directory::UserDirectory;
pub use errors::UserError;
pub use session::Session;
pub use types::*;
