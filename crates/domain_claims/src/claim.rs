//! Claim records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId};

const CLOSED: &str = "Closed";

/// Claim status
///
/// Only `"Closed"` (exact, case-sensitive) is closed. Every other status
/// string is an open state and keeps its original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    Closed,
    Open(String),
}

impl ClaimStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, ClaimStatus::Closed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::Closed => CLOSED,
            ClaimStatus::Open(status) => status,
        }
    }
}

impl From<String> for ClaimStatus {
    fn from(status: String) -> Self {
        if status == CLOSED {
            ClaimStatus::Closed
        } else {
            ClaimStatus::Open(status)
        }
    }
}

impl From<&str> for ClaimStatus {
    fn from(status: &str) -> Self {
        ClaimStatus::from(status.to_string())
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Closed => CLOSED.to_string(),
            ClaimStatus::Open(status) => status,
        }
    }
}

/// A claim filed against a disaster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub disaster_id: DisasterId,
    pub agent_assigned_id: AgentId,
    pub claim_handler_assigned_id: ClaimHandlerId,
    pub status: ClaimStatus,
    /// 1 (minor) through 10 (catastrophic)
    pub severity_rating: i32,
    pub estimate_cost: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_of_claim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loss: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss_of_life: Option<bool>,
}

impl Claim {
    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// Checks if the claim is still open with at least the given severity
    pub fn is_open_at_or_above(&self, min_severity_rating: i32) -> bool {
        !self.is_closed() && self.severity_rating >= min_severity_rating
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use super::*;

    #[test]
    fn test_status_closed_is_case_sensitive() {
        assert!(ClaimStatus::from("Closed").is_closed());
        assert!(!ClaimStatus::from("closed").is_closed());
        assert!(!ClaimStatus::from("In Review").is_closed());
    }

    #[test]
    fn test_open_status_keeps_text() {
        let status = ClaimStatus::from("Received");
        assert_eq!(status.as_str(), "Received");
        assert_eq!(String::from(status), "Received");
    }

    #[test]
    fn test_claim_deserializes_dataset_record() {
        let json = r#"{
            "id": 1,
            "disaster_id": 4,
            "status": "Closed",
            "total_loss": false,
            "loss_of_life": false,
            "type_of_claim": "Fire",
            "estimate_cost": 12000.57,
            "agent_assigned_id": 9,
            "claim_handler_assigned_id": 2,
            "severity_rating": 7
        }"#;

        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.disaster_id, DisasterId::new(4));
        assert_eq!(claim.estimate_cost, dec!(12000.57));
        assert!(claim.is_closed());
        assert_eq!(claim.type_of_claim.as_deref(), Some("Fire"));
    }

    #[test]
    fn test_is_open_at_or_above() {
        let mut claim: Claim = serde_json::from_str(
            r#"{"id":1,"disaster_id":1,"status":"Received","estimate_cost":10,
                "agent_assigned_id":1,"claim_handler_assigned_id":1,"severity_rating":5}"#,
        )
        .unwrap();

        assert!(claim.is_open_at_or_above(5));
        assert!(!claim.is_open_at_or_above(6));

        claim.status = ClaimStatus::Closed;
        assert!(!claim.is_open_at_or_above(1));
    }
}
