use serde::{Deserialize, Serialize};

use crate::env::status::UserRole;

/// The dashboard's current identity.
///
/// `address` is what vote deduplication keys on. `voting_power` is a static
/// weight, not derived from any stake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub address: String,
    pub role: UserRole,
    pub token_balance: u64,
    pub voting_power: u64,
}

impl User {
    pub fn new(id: impl Into<String>, address: impl Into<String>, role: UserRole, voting_power: u64) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            role,
            token_balance: voting_power,
            voting_power,
        }
    }

    /// Returns the same user acting under another role.
    pub fn with_role(&self, role: UserRole) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }
}
