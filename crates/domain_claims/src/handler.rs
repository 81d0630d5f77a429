//! Claim handler records

use serde::{Deserialize, Serialize};

use core_kernel::ClaimHandlerId;

/// An employee who processes claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimHandler {
    pub id: ClaimHandlerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ClaimHandler {
    /// Full name, or the identifier when no name parts are present
    pub fn name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            self.id.to_string()
        } else {
            parts.join(" ")
        }
    }
}
