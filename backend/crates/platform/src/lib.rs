//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations:
//! - Cryptographic utilities (base64url, random bytes)
//! - Password hashing (Argon2id)

pub mod crypto;
pub mod password;
