//! Disaster records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{DisasterId, PeriodKey};

/// A declared disaster with a circular impact area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disaster {
    pub id: DisasterId,
    /// Kind of disaster, e.g. "Hurricane"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// US state or territory name
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub declared_date: NaiveDate,
    pub end_date: NaiveDate,
    pub radius_miles: Decimal,
}

impl Disaster {
    /// Checks if the disaster was declared strictly after it ended
    pub fn declared_after_end(&self) -> bool {
        self.declared_date > self.end_date
    }

    /// Impact area in square miles, treating the radius as a circle
    ///
    /// Returns `None` when the area overflows `Decimal`.
    pub fn impact_area(&self) -> Option<Decimal> {
        Decimal::PI
            .checked_mul(self.radius_miles)?
            .checked_mul(self.radius_miles)
    }

    /// Month/year period the disaster was declared in
    pub fn declared_period(&self) -> PeriodKey {
        PeriodKey::from_date(self.declared_date)
    }
}
