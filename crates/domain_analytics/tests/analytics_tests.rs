//! Comprehensive tests for domain_analytics
//!
//! Most expectations refer to the scenario documented in
//! `test_utils::fixtures`.

use rust_decimal_macros::dec;

use core_kernel::{AgentId, ClaimHandlerId, DisasterId, Region};
use domain_analytics::{AnalyticsError, ClaimsAnalytics};
use test_utils::{agent, ClaimBuilder, DatasetsBuilder, DisasterBuilder, SCENARIO};

fn analytics() -> ClaimsAnalytics<'static> {
    ClaimsAnalytics::new(&SCENARIO)
}

// ============================================================================
// Claim Queries
// ============================================================================

mod claim_queries {
    use super::*;

    #[test]
    fn test_count_closed_claims() {
        assert_eq!(analytics().count_closed_claims(), 3);
    }

    #[test]
    fn test_count_closed_claims_empty_dataset() {
        let data = DatasetsBuilder::new().build();
        assert_eq!(ClaimsAnalytics::new(&data).count_closed_claims(), 0);
    }

    #[test]
    fn test_closed_match_is_case_sensitive() {
        let data = DatasetsBuilder::new()
            .claim(ClaimBuilder::new(1).status("closed").build())
            .claim(ClaimBuilder::new(2).status("CLOSED").build())
            .claim(ClaimBuilder::new(3).closed().build())
            .build();
        assert_eq!(ClaimsAnalytics::new(&data).count_closed_claims(), 1);
    }

    #[test]
    fn test_count_claims_for_handler() {
        let analytics = analytics();
        assert_eq!(analytics.count_claims_for_handler(ClaimHandlerId::new(1)), Ok(4));
        assert_eq!(analytics.count_claims_for_handler(ClaimHandlerId::new(2)), Ok(4));
    }

    #[test]
    fn test_count_claims_for_handler_without_claims_is_not_found() {
        // Handler 3 exists but has no claims
        let result = analytics().count_claims_for_handler(ClaimHandlerId::new(3));
        assert_eq!(
            result,
            Err(AnalyticsError::NotFound {
                entity: "claim handler",
                key: "CLH-3".to_string()
            })
        );
    }

    #[test]
    fn test_total_claim_cost_for_disaster() {
        let analytics = analytics();
        let total = |id| analytics.total_claim_cost_for_disaster(DisasterId::new(id));
        assert_eq!(total(1), Some(dec!(5000.75)));
        assert_eq!(total(2), Some(dec!(400.00)));
        assert_eq!(total(5), Some(dec!(1099.99)));
    }

    #[test]
    fn test_total_claim_cost_for_disaster_without_claims() {
        let analytics = analytics();
        assert_eq!(analytics.total_claim_cost_for_disaster(DisasterId::new(6)), None);
        assert_eq!(analytics.total_claim_cost_for_disaster(DisasterId::new(404)), None);
    }

    #[test]
    fn test_total_claim_cost_rounds_to_cents() {
        let data = DatasetsBuilder::new()
            .claim(ClaimBuilder::new(1).disaster(7).cost(dec!(0.333)).build())
            .claim(ClaimBuilder::new(2).disaster(7).cost(dec!(0.333)).build())
            .build();
        assert_eq!(
            ClaimsAnalytics::new(&data).total_claim_cost_for_disaster(DisasterId::new(7)),
            Some(dec!(0.67))
        );
    }

    #[test]
    fn test_average_claim_cost_for_handler() {
        let analytics = analytics();
        let average = |id| analytics.average_claim_cost_for_handler(ClaimHandlerId::new(id));
        // (1500.00 + 2500.50 + 3200.10 + 999.99) / 4 = 2050.1475
        assert_eq!(average(1), Some(dec!(2050.15)));
        // (1000.25 + 400.00 + 800.00 + 100.00) / 4 = 575.0625
        assert_eq!(average(2), Some(dec!(575.06)));
        assert_eq!(average(3), None);
    }

    #[test]
    fn test_open_claims_for_agent_and_severity() {
        let analytics = analytics();
        let agent_1 = AgentId::new(1);

        assert_eq!(analytics.count_open_claims_for_agent(agent_1, 5), Ok(Some(2)));
        assert_eq!(analytics.count_open_claims_for_agent(agent_1, 7), Ok(Some(1)));
        assert_eq!(analytics.count_open_claims_for_agent(agent_1, 10), Ok(None));
    }

    #[test]
    fn test_open_claims_threshold_is_inclusive() {
        let analytics = analytics();
        // Agent 2 has one open claim of severity 3
        assert_eq!(analytics.count_open_claims_for_agent(AgentId::new(2), 3), Ok(Some(1)));
        assert_eq!(analytics.count_open_claims_for_agent(AgentId::new(2), 4), Ok(None));
    }

    #[test]
    fn test_open_claims_for_agents_without_matches() {
        let analytics = analytics();
        // Agent 3 only has a closed claim, agent 8 has none, agent 1000 does not exist
        assert_eq!(analytics.count_open_claims_for_agent(AgentId::new(3), 1), Ok(None));
        assert_eq!(analytics.count_open_claims_for_agent(AgentId::new(8), 1), Ok(None));
        assert_eq!(analytics.count_open_claims_for_agent(AgentId::new(1000), 1), Ok(None));
    }

    #[test]
    fn test_open_claims_rejects_out_of_range_severity() {
        let analytics = analytics();
        for rating in [-1, 0, 11, 100] {
            let result = analytics.count_open_claims_for_agent(AgentId::new(1), rating);
            assert!(matches!(result, Err(AnalyticsError::InvalidArgument(_))), "rating {}", rating);
        }
    }
}

// ============================================================================
// Disaster Queries
// ============================================================================

mod disaster_queries {
    use super::*;

    #[test]
    fn test_count_disasters_for_state() {
        let analytics = analytics();
        assert_eq!(analytics.count_disasters_for_state("Texas"), Ok(2));
        assert_eq!(analytics.count_disasters_for_state("Ohio"), Ok(1));
    }

    #[test]
    fn test_count_disasters_for_unknown_state_is_not_found() {
        let analytics = analytics();
        assert!(analytics.count_disasters_for_state("Oklahoma").unwrap_err().is_not_found());
        // exact match only
        assert!(analytics.count_disasters_for_state("texas").unwrap_err().is_not_found());
    }

    #[test]
    fn test_state_with_most_and_least_disasters() {
        let analytics = analytics();
        // Texas and Florida tie at 2, Alaska and Ohio tie at 1
        assert_eq!(analytics.state_with_most_disasters(), Some("Florida"));
        assert_eq!(analytics.state_with_least_disasters(), Some("Alaska"));
    }

    #[test]
    fn test_most_and_least_tie_break_in_same_direction() {
        let mut builder = DatasetsBuilder::new();
        let mut id = 0;
        for (state, count) in [("B", 3), ("A", 3), ("C", 1)] {
            for _ in 0..count {
                id += 1;
                builder = builder.disaster(DisasterBuilder::new(id).state(state).build());
            }
        }
        let data = builder.build();
        let analytics = ClaimsAnalytics::new(&data);

        assert_eq!(analytics.state_with_most_disasters(), Some("A"));
        assert_eq!(analytics.state_with_least_disasters(), Some("C"));
    }

    #[test]
    fn test_most_and_least_without_disasters() {
        let data = DatasetsBuilder::new().build();
        let analytics = ClaimsAnalytics::new(&data);
        assert_eq!(analytics.state_with_most_disasters(), None);
        assert_eq!(analytics.state_with_least_disasters(), None);
    }

    #[test]
    fn test_count_disasters_declared_after_end_date() {
        assert_eq!(analytics().count_disasters_declared_after_end_date(), 2);
    }

    #[test]
    fn test_declared_after_end_examples() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).declared("2023-05-10").ended("2023-05-01").build())
            .disaster(DisasterBuilder::new(2).declared("2023-04-01").ended("2023-05-01").build())
            .disaster(DisasterBuilder::new(3).declared("2023-05-01").ended("2023-05-01").build())
            .build();
        assert_eq!(ClaimsAnalytics::new(&data).count_disasters_declared_after_end_date(), 1);
    }

    #[test]
    fn test_disaster_claim_density() {
        let analytics = analytics();
        // 3 claims / (pi * 25)
        assert_eq!(analytics.disaster_claim_density(DisasterId::new(1)), Some(dec!(0.038)));
        // 1 claim / (pi * 100)
        assert_eq!(analytics.disaster_claim_density(DisasterId::new(2)), Some(dec!(0.003)));
    }

    #[test]
    fn test_density_ten_claims_radius_five() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).radius(dec!(5)).build())
            .disaster(DisasterBuilder::new(2).radius(dec!(50)).build())
            .claims((1..=10).map(|id| ClaimBuilder::new(id).disaster(1).build()))
            .build();
        let analytics = ClaimsAnalytics::new(&data);

        assert_eq!(analytics.disaster_claim_density(DisasterId::new(1)), Some(dec!(0.127)));
    }

    #[test]
    fn test_density_for_disaster_without_claims_is_zero() {
        assert_eq!(analytics().disaster_claim_density(DisasterId::new(6)), Some(dec!(0)));
    }

    #[test]
    fn test_density_for_missing_disaster_is_none() {
        assert_eq!(analytics().disaster_claim_density(DisasterId::new(404)), None);
    }

    #[test]
    fn test_density_for_zero_radius_is_none() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).radius(dec!(0)).build())
            .claim(ClaimBuilder::new(1).disaster(1).build())
            .build();
        assert_eq!(ClaimsAnalytics::new(&data).disaster_claim_density(DisasterId::new(1)), None);
    }

    #[test]
    fn test_density_for_overflowing_radius_is_none() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).radius(dec!(200000000000000)).build())
            .claim(ClaimBuilder::new(1).disaster(1).build())
            .build();
        assert_eq!(ClaimsAnalytics::new(&data).disaster_claim_density(DisasterId::new(1)), None);
    }

    #[test]
    fn test_count_disasters_by_region() {
        let by_region = analytics().count_disasters_by_region();

        assert_eq!(by_region.get(&Region::South), Some(&4));
        assert_eq!(by_region.get(&Region::West), Some(&1));
        assert_eq!(by_region.get(&Region::Midwest), Some(&1));
        assert_eq!(by_region.get(&Region::Northeast), None);
    }

    #[test]
    fn test_count_disasters_by_region_skips_territories() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).state("Puerto Rico").build())
            .disaster(DisasterBuilder::new(2).state("Maine").build())
            .build();
        let by_region = ClaimsAnalytics::new(&data).count_disasters_by_region();

        assert_eq!(by_region.len(), 1);
        assert_eq!(by_region[&Region::Northeast], 1);
    }
}

// ============================================================================
// Agent Queries
// ============================================================================

mod agent_queries {
    use super::*;

    #[test]
    fn test_most_spoken_language_for_state() {
        assert_eq!(analytics().most_spoken_language_for_state("Texas"), "Spanish");
    }

    #[test]
    fn test_most_spoken_language_tie_goes_to_first_alphabetically() {
        // Florida: French x2, German x2
        assert_eq!(analytics().most_spoken_language_for_state("Florida"), "French");
    }

    #[test]
    fn test_most_spoken_language_for_state_without_agents() {
        assert_eq!(analytics().most_spoken_language_for_state("Ohio"), "");
        assert_eq!(analytics().most_spoken_language_for_state("Atlantis"), "");
    }

    #[test]
    fn test_most_spoken_language_ignores_other_states() {
        let data = DatasetsBuilder::new()
            .agent(agent(1, "Utah", "Navajo"))
            .agent(agent(2, "Iowa", "Arabic"))
            .agent(agent(3, "Iowa", "Arabic"))
            .build();
        assert_eq!(ClaimsAnalytics::new(&data).most_spoken_language_for_state("Utah"), "Navajo");
    }

    #[test]
    fn test_total_claim_cost_by_agent() {
        let totals = analytics().total_claim_cost_by_agent();

        assert_eq!(totals[&AgentId::new(1)], dec!(5000.49));
        assert_eq!(totals[&AgentId::new(2)], dec!(1000.25));
        assert_eq!(totals[&AgentId::new(3)], dec!(400.00));
        assert_eq!(totals[&AgentId::new(4)], dec!(3200.10));
        assert_eq!(totals[&AgentId::new(5)], dec!(800.00));
    }

    #[test]
    fn test_total_claim_cost_by_agent_includes_agents_without_claims() {
        let totals = analytics().total_claim_cost_by_agent();

        for id in [6, 7, 8] {
            assert_eq!(totals[&AgentId::new(id)], dec!(0), "agent {}", id);
            assert_eq!(totals[&AgentId::new(id)].to_string(), "0.00", "agent {}", id);
        }
    }

    #[test]
    fn test_total_claim_cost_by_agent_keeps_unknown_claim_agents() {
        let totals = analytics().total_claim_cost_by_agent();

        assert_eq!(totals[&AgentId::new(99)], dec!(100.00));
        assert_eq!(totals.get(&AgentId::new(1000)), None);
        assert_eq!(totals.len(), 9);
    }
}

// ============================================================================
// Period Queries
// ============================================================================

mod period_queries {
    use super::*;

    #[test]
    fn test_top_three_periods_by_claim_cost() {
        let top = analytics().top_three_periods_by_claim_cost().unwrap();

        let labels: Vec<String> = top.iter().map(|p| p.period.label()).collect();
        assert_eq!(labels, vec!["5/2023", "2/2023", "11/2022"]);
        assert_eq!(top[0].total_cost, dec!(8200.85));
        assert_eq!(top[1].total_cost, dec!(1099.99));
        assert_eq!(top[2].total_cost, dec!(800.00));
    }

    #[test]
    fn test_top_periods_tie_breaks_by_label() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).declared("2023-09-01").build())
            .disaster(DisasterBuilder::new(2).declared("2023-10-01").build())
            .claim(ClaimBuilder::new(1).disaster(1).cost(dec!(50)).build())
            .claim(ClaimBuilder::new(2).disaster(2).cost(dec!(50)).build())
            .build();
        let top = ClaimsAnalytics::new(&data).top_three_periods_by_claim_cost().unwrap();

        let labels: Vec<String> = top.iter().map(|p| p.period.label()).collect();
        assert_eq!(labels, vec!["10/2023", "9/2023"]);
    }

    #[test]
    fn test_top_periods_without_claims_is_empty() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).build())
            .build();
        let top = ClaimsAnalytics::new(&data).top_three_periods_by_claim_cost().unwrap();
        assert!(top.is_empty());
    }

    #[test]
    fn test_top_periods_with_dangling_disaster_is_not_found() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).build())
            .claim(ClaimBuilder::new(1).disaster(2).build())
            .build();
        let result = ClaimsAnalytics::new(&data).top_three_periods_by_claim_cost();

        assert_eq!(result, Err(AnalyticsError::not_found("disaster", DisasterId::new(2))));
    }
}

// ============================================================================
// Display Data
// ============================================================================

mod display {
    use super::*;

    #[test]
    fn test_display_data_skips_unknown_and_repeated_states() {
        let data = analytics().display_data();

        assert_eq!(data.x, vec!["Alaska", "Florida", "Texas"]);
        assert_eq!(data.y, vec![1, 2, 2]);
    }

    #[test]
    fn test_display_data_empty_dataset() {
        let data = DatasetsBuilder::new().build();
        assert!(ClaimsAnalytics::new(&data).display_data().is_empty());
    }

    #[test]
    fn test_display_data_series_have_equal_length() {
        let data = DatasetsBuilder::new()
            .disaster(DisasterBuilder::new(1).state("Oklahoma").build())
            .disaster(DisasterBuilder::new(2).state("Guam").build())
            .disaster(DisasterBuilder::new(3).state("Guam").build())
            .disaster(DisasterBuilder::new(4).state("New York").build())
            .build();
        let display = ClaimsAnalytics::new(&data).display_data();

        assert_eq!(display.x, vec!["New York", "Guam", "Oklahoma"]);
        assert_eq!(display.x.len(), display.y.len());
    }
}
