//! Constants used throughout the catalog library.

/// Default catalog file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "products.txt";

/// Accounts installed at startup as `(username, password)`. All are admins.
pub const BUILTIN_USERS: &[(&str, &str)] = &[
    ("admin", "admin123"),
    ("ayush", "ayush"),
    ("rohan", "rohan"),
];

/// Number of lines making up one product record in the catalog file.
pub const RECORD_LINES: usize = 7;
