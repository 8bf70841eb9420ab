//! Role Reference
//!
//! Roles live in a fixed table and are only ever looked up by name.

use std::fmt;

/// Name of the role granted to new accounts unless configured otherwise
pub const DEFAULT_ROLE: &str = "ROLE_USER";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleRef {
    name: String,
}

impl RoleRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RoleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(RoleRef::new(DEFAULT_ROLE).to_string(), "ROLE_USER");
    }
}
