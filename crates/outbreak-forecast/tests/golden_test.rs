//! Golden forecast scenarios loaded from the shared fixture crate.

use std::collections::BTreeMap;

use outbreak_core::config::{DistanceModelConfig, NetworkModelConfig, NetworkType};
use outbreak_core::models::{Case, ConnectivityTable, ForecastResult, Region};
use outbreak_core::traits::{FitContext, IForecastModel, PredictContext};
use outbreak_forecast::{DistanceDecayModel, NetworkPropagationModel};
use serde::Deserialize;

const TOLERANCE: f64 = 1e-6;

#[derive(Deserialize)]
struct ExpectedRegion {
    risk: f64,
    predicted_cases: f64,
    confidence_interval: (f64, f64),
}

#[derive(Deserialize)]
struct ExpectedPath {
    source: String,
    target: String,
    risk: f64,
}

#[derive(Deserialize)]
struct DistanceScenario {
    description: String,
    days_ahead: u32,
    fit_cases: Vec<Case>,
    cases: Vec<Case>,
    regions: Vec<Region>,
    expected: DistanceExpected,
}

#[derive(Deserialize)]
struct DistanceExpected {
    event_count: usize,
    base_transmission_rate: f64,
    skipped_regions: Vec<String>,
    regions: BTreeMap<String, ExpectedRegion>,
}

#[derive(Deserialize)]
struct NetworkScenario {
    description: String,
    network_type: NetworkType,
    days_ahead: u32,
    connectivity: ConnectivityTable,
    fit_cases: Vec<Case>,
    cases: Vec<Case>,
    regions: Vec<Region>,
    expected: NetworkExpected,
}

#[derive(Deserialize)]
struct NetworkExpected {
    edge_probabilities: BTreeMap<String, f64>,
    regions: BTreeMap<String, ExpectedRegion>,
    transmission_paths: Vec<ExpectedPath>,
}

fn approx(actual: f64, expected: f64, what: &str, scenario: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "[{scenario}] {what}: expected {expected}, got {actual}"
    );
}

fn check_regions(
    result: &ForecastResult,
    expected: &BTreeMap<String, ExpectedRegion>,
    scenario: &str,
) {
    assert_eq!(
        result.region_count(),
        expected.len(),
        "[{scenario}] region count"
    );
    for (id, want) in expected {
        let risk = result
            .risk(id)
            .unwrap_or_else(|| panic!("[{scenario}] missing region {id}"));
        approx(risk, want.risk, &format!("{id} risk"), scenario);
        approx(
            result.predicted_case_count[id],
            want.predicted_cases,
            &format!("{id} predicted cases"),
            scenario,
        );
        let ci = result.confidence_intervals[id];
        assert_eq!(
            (ci.lower, ci.upper),
            want.confidence_interval,
            "[{scenario}] {id} interval"
        );
    }
}

// =============================================================================
// Distance decay
// =============================================================================

#[test]
fn golden_distance_decay_single_case() {
    let scenario: DistanceScenario =
        test_fixtures::load_fixture("golden/forecast/distance_decay_single_case.json");
    let name = scenario.description.as_str();

    let mut model = DistanceDecayModel::new(DistanceModelConfig::default());
    model
        .fit(&scenario.fit_cases, &scenario.regions, &FitContext::default())
        .unwrap();
    let params = model.params().unwrap();
    assert_eq!(params.event_count, scenario.expected.event_count, "[{name}] events");
    approx(
        params.base_transmission_rate,
        scenario.expected.base_transmission_rate,
        "base rate",
        name,
    );

    let result = model
        .predict(
            &scenario.cases,
            &scenario.regions,
            scenario.days_ahead,
            &PredictContext::default(),
        )
        .unwrap();
    check_regions(&result, &scenario.expected.regions, name);
    for skipped in &scenario.expected.skipped_regions {
        assert!(result.risk(skipped).is_none(), "[{name}] {skipped} should be skipped");
    }
}

// =============================================================================
// Network propagation
// =============================================================================

#[test]
fn golden_network_propagation() {
    let scenario: NetworkScenario =
        test_fixtures::load_fixture("golden/forecast/network_propagation.json");
    let name = scenario.description.as_str();

    let mut model = NetworkPropagationModel::new(NetworkModelConfig {
        network_type: scenario.network_type,
        ..NetworkModelConfig::default()
    });
    model
        .fit(
            &scenario.fit_cases,
            &scenario.regions,
            &FitContext::with_connectivity(scenario.connectivity.clone()),
        )
        .unwrap();
    for (edge, &want) in &scenario.expected.edge_probabilities {
        let (source, target) = edge.split_once(':').unwrap();
        let got = model.edge_probability(source, target).unwrap();
        approx(got, want, &format!("edge {edge}"), name);
    }

    let result = model
        .predict(
            &scenario.cases,
            &scenario.regions,
            scenario.days_ahead,
            &PredictContext::default(),
        )
        .unwrap();
    check_regions(&result, &scenario.expected.regions, name);

    assert_eq!(
        result.transmission_paths.len(),
        scenario.expected.transmission_paths.len(),
        "[{name}] path count"
    );
    for (got, want) in result
        .transmission_paths
        .iter()
        .zip(&scenario.expected.transmission_paths)
    {
        assert_eq!(
            (got.source.as_str(), got.target.as_str()),
            (want.source.as_str(), want.target.as_str()),
            "[{name}] path order"
        );
        approx(got.risk, want.risk, "path risk", name);
    }
}
