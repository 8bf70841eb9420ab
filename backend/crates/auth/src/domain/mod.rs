//! Domain Layer
//!
//! Entities, value objects, and the traits for everything the core consumes.

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

// Re-exports
pub use entity::{FederatedIdentity, PublicUserView, StoredUser};
pub use repository::{RoleStore, UserStore};
pub use service::{Clock, FederationProvider, PasswordHasher};
pub use value_object::{Credentials, DEFAULT_ROLE, Registration, RoleRef};
