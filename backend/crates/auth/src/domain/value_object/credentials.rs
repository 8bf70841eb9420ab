//! Credentials
//!
//! Username and clear-text password, alive for one request only.

use platform::password::ClearTextPassword;

/// Local login input
///
/// The password is wiped on drop and never shows up in `Debug`.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: ClearTextPassword,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: String) -> Self {
        Self {
            username: username.into(),
            password: ClearTextPassword::new(password),
        }
    }
}

/// Registration input
#[derive(Debug)]
pub struct Registration {
    pub username: String,
    pub password: ClearTextPassword,
    pub email: String,
}

impl Registration {
    pub fn new(username: impl Into<String>, password: String, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: ClearTextPassword::new(password),
            email: email.into(),
        }
    }
}
