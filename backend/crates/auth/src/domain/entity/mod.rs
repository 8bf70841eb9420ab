//! Domain Entities

pub mod identity;
pub mod user;

pub use identity::FederatedIdentity;
pub use user::{PublicUserView, StoredUser};
