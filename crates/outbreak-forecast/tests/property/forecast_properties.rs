//! Property tests for outbreak-forecast: bounded risk, valid intervals,
//! normalised ensemble weights.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use outbreak_core::config::OutbreakConfig;
use outbreak_core::models::{Case, ConnectivityTable, ForecastResult, Region};
use outbreak_core::traits::{FitContext, IForecastModel, PredictContext};
use outbreak_forecast::{
    DistanceDecayModel, ForecastManager, NetworkPropagationModel, WeightTable,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

const REGION_IDS: [&str; 4] = ["r0", "r1", "r2", "r3"];

fn regions() -> Vec<Region> {
    REGION_IDS
        .iter()
        .enumerate()
        .map(|(i, id)| {
            Region::new(*id)
                .with_centroid(40.0 + 0.3 * i as f64, -90.0 + 0.2 * i as f64)
                .with_farm_count(5 + i as u32)
        })
        .collect()
}

/// Cases near the regions over about a month, each assigned a region.
fn case_strategy() -> impl Strategy<Value = Vec<Case>> {
    prop::collection::vec(
        (0u64..30, 39.5_f64..41.5, -90.5_f64..-89.0, 0usize..REGION_IDS.len()),
        1..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (offset, lat, lon, region))| {
                Case::new(format!("c{i}"), lat, lon, base_date() + Days::new(offset))
                    .with_region(REGION_IDS[region])
            })
            .collect()
    })
}

fn connectivity() -> ConnectivityTable {
    ConnectivityTable::new()
        .with_edge("r0", "r1", 0.9)
        .with_edge("r1", "r2", 0.6)
        .with_edge("r2", "r3", 0.4)
        .with_edge("r3", "r0", 0.2)
        .with_edge("r0", "r2", 0.3)
}

fn assert_well_formed(result: &ForecastResult) -> Result<(), TestCaseError> {
    for (region, &risk) in &result.risk_by_region {
        prop_assert!((0.0..=1.0).contains(&risk), "{region} risk {risk}");
        let cases = result.predicted_case_count[region];
        prop_assert!(cases >= 0.0 && cases.is_finite());
        let ci = result.confidence_intervals[region];
        prop_assert!(ci.lower >= 0.0 && ci.lower <= ci.upper);
    }
    Ok(())
}

// =============================================================================
// Per-model outputs are bounded
// =============================================================================
proptest! {
    #[test]
    fn distance_decay_outputs_are_bounded(
        history in case_strategy(),
        active in case_strategy(),
        days in 1u32..30,
    ) {
        let mut model = DistanceDecayModel::default();
        model.fit(&history, &regions(), &FitContext::default()).unwrap();
        let result = model
            .predict(&active, &regions(), days, &PredictContext::default())
            .unwrap();
        prop_assert_eq!(result.region_count(), REGION_IDS.len());
        assert_well_formed(&result)?;
    }

    #[test]
    fn network_outputs_are_bounded(
        history in case_strategy(),
        active in case_strategy(),
        days in 1u32..30,
        season in 0.0_f64..5.0,
    ) {
        let mut model = NetworkPropagationModel::default().with_connectivity(connectivity());
        model.fit(&history, &regions(), &FitContext::default()).unwrap();
        let ctx = PredictContext {
            seasonal_factor: Some(season),
            ..PredictContext::default()
        };
        let result = model.predict(&active, &regions(), days, &ctx).unwrap();
        assert_well_formed(&result)?;
        for path in &result.transmission_paths {
            prop_assert!(path.risk > 0.05);
        }
    }
}

// =============================================================================
// Ensemble forecasts stay bounded and weights stay normalised
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ensemble_forecast_is_bounded(cases in case_strategy(), days in 1u32..14) {
        let mut manager = ForecastManager::with_default_models(&OutbreakConfig::default());
        manager.add_network_model(
            connectivity(),
            outbreak_core::config::NetworkType::Transport,
            &OutbreakConfig::default().network_model,
        );
        let _ = manager.train_models(&cases, &regions(), &FitContext::default());
        let result = manager.generate_forecast(
            &cases,
            &regions(),
            days,
            true,
            None,
            &PredictContext::default(),
        );
        if let Ok(result) = result {
            assert_well_formed(&result)?;
            if let Some(weights) = &result.model_weights {
                let total: f64 = weights.values().sum();
                prop_assert!((total - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn reweighted_tables_normalise_to_one(
        raw in prop::collection::btree_map("[a-e]", 0.0_f64..10.0, 1..5),
        rmse in prop::collection::btree_map("[a-e]", 0.0_f64..20.0, 0..5),
    ) {
        let table = raw
            .iter()
            .fold(WeightTable::new(), |t, (id, &w)| t.with_model(id.clone(), w));
        let reweighted = table.reweighted(&rmse);
        let normalized: BTreeMap<String, f64> = reweighted.normalized();
        let total: f64 = normalized.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
        prop_assert!(normalized.values().all(|w| *w >= 0.0));
    }
}
