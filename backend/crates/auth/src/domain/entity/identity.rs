//! Federated Identity

/// Identity asserted by the federation provider
///
/// `display_name` doubles as the local username for federated accounts, so
/// two provider accounts sharing a display name resolve to one local user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedIdentity {
    pub email: String,
    pub display_name: String,
}
