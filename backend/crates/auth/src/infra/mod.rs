//! Infrastructure Layer
//!
//! Stores, hashing, clocks and the federation provider client.

pub mod clock;
pub mod google;
pub mod hasher;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
pub use google::GoogleFederationClient;
pub use hasher::Argon2Hasher;
pub use memory::InMemoryAuthStore;
pub use postgres::PgAuthRepository;
