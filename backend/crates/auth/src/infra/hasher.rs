//! Argon2id password hasher

use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AuthConfig;
use crate::domain::service::PasswordHasher;
use crate::error::{AuthError, AuthResult};

/// Argon2id with an optional application-wide pepper
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    pepper: Option<Vec<u8>>,
}

impl Argon2Hasher {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self { pepper }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.password_pepper.clone())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain: &ClearTextPassword) -> AuthResult<String> {
        plain
            .hash(self.pepper.as_deref())
            .map(HashedPassword::into_phc_string)
            .map_err(|e| AuthError::Unexpected(e.to_string()))
    }

    fn matches(&self, plain: &ClearTextPassword, hash: &str) -> bool {
        match HashedPassword::from_phc_string(hash) {
            Ok(hashed) => hashed.verify(plain, self.pepper.as_deref()),
            Err(_) => {
                tracing::warn!("Stored password hash is not a valid PHC string");
                false
            }
        }
    }
}
