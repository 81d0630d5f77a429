//! Claim cost by declaration period

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use core_kernel::{round_currency, DisasterId, PeriodKey};

use crate::buckets::fill_buckets;
use crate::engine::ClaimsAnalytics;
use crate::error::AnalyticsError;
use crate::ranking::top_n;

const TOP_PERIODS: usize = 3;

/// Total claim cost attributed to one month/year period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodCost {
    pub period: PeriodKey,
    pub total_cost: Decimal,
}

impl<'a> ClaimsAnalytics<'a> {
    /// The three periods with the highest total claim cost, highest first
    ///
    /// Each claim's cost is attributed to the month its disaster was declared
    /// in. Equal totals are ordered by ascending period label (`"10/2023"`
    /// before `"9/2023"`). Fewer than three periods yields a shorter list.
    ///
    /// # Errors
    ///
    /// `NotFound` if a claim references a disaster that does not exist.
    pub fn top_three_periods_by_claim_cost(&self) -> Result<Vec<PeriodCost>, AnalyticsError> {
        let period_of: HashMap<DisasterId, PeriodKey> = self
            .disasters()
            .iter()
            .map(|disaster| (disaster.id, disaster.declared_period()))
            .collect();

        let attributed = self
            .claims()
            .iter()
            .map(|claim| {
                period_of
                    .get(&claim.disaster_id)
                    .map(|period| (*period, claim.estimate_cost))
                    .ok_or_else(|| AnalyticsError::not_found("disaster", claim.disaster_id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let by_period = fill_buckets(
            attributed,
            |(period, _)| *period,
            || Decimal::ZERO,
            |total, (_, cost)| *total += *cost,
        );

        let ranked = top_n(
            by_period.into_iter().map(|(period, total)| (total, period)),
            TOP_PERIODS,
        );
        Ok(ranked
            .into_iter()
            .map(|(total, period)| PeriodCost {
                period,
                total_cost: round_currency(total),
            })
            .collect())
    }
}
