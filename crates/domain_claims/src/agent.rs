//! Insurance agent records

use serde::{Deserialize, Serialize};

use core_kernel::AgentId;

/// A field agent assigned to claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// State the agent works in
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<String>,
    /// Language spoken besides the primary one
    pub secondary_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_active: Option<u32>,
}
