//! Shared Kernel - Domain-crossing minimal core
//!
//! Contains only vocabulary shared by every crate:
//! - Unified error type and its transport classification
//! - Typed ID wrappers

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;
