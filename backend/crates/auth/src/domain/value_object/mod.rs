//! Value Objects

pub mod credentials;
pub mod role;

pub use credentials::{Credentials, Registration};
pub use role::{DEFAULT_ROLE, RoleRef};
