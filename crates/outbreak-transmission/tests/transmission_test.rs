//! Integration tests for outbreak-transmission: inference, rankings, pattern
//! assessment and trajectory.

use chrono::{Days, NaiveDate};
use outbreak_core::config::TransmissionConfig;
use outbreak_core::errors::{OutbreakError, TransmissionError};
use outbreak_core::models::{
    Case, GeographicFocus, InferenceThresholds, PatternType, PriorityLevel, TemporalPattern,
};
use outbreak_transmission::{
    analyze_dynamics, assess_pattern, infer_network, predict_trajectory, TransmissionEngine,
};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset)
}

fn case_at(id: &str, offset: u64, lat: f64, lon: f64) -> Case {
    Case::new(id, lat, lon, day(offset))
}

fn thresholds() -> InferenceThresholds {
    InferenceThresholds {
        genetic_threshold: 0.05,
        temporal_window_days: 30,
        spatial_threshold_km: 100.0,
    }
}

// =============================================================================
// Input validation
// =============================================================================

#[test]
fn fewer_than_two_cases_is_insufficient_data() {
    let err = infer_network(&[case_at("a", 0, 40.0, -90.0)], 0.05, 30, 100.0).unwrap_err();
    assert!(err.is_insufficient_data());
    assert!(matches!(
        err,
        OutbreakError::Transmission(TransmissionError::InsufficientData {
            required: 2,
            actual: 1
        })
    ));

    let err = infer_network(&[], 0.05, 30, 100.0).unwrap_err();
    assert!(err.is_insufficient_data());
}

#[test]
fn invalid_thresholds_are_rejected() {
    let cases = vec![case_at("a", 0, 40.0, -90.0), case_at("b", 1, 40.0, -90.0)];

    let err = infer_network(&cases, 0.05, 0, 100.0).unwrap_err();
    assert!(matches!(
        err,
        OutbreakError::Transmission(TransmissionError::InvalidThreshold {
            name: "temporal_window_days",
            ..
        })
    ));

    let err = infer_network(&cases, 0.05, 30, -1.0).unwrap_err();
    assert!(matches!(
        err,
        OutbreakError::Transmission(TransmissionError::InvalidThreshold {
            name: "spatial_threshold_km",
            ..
        })
    ));

    let err = infer_network(&cases, f64::NAN, 30, 100.0).unwrap_err();
    assert!(matches!(
        err,
        OutbreakError::Transmission(TransmissionError::InvalidThreshold {
            name: "genetic_threshold",
            ..
        })
    ));
}

#[test]
fn duplicate_case_ids_are_rejected() {
    let cases = vec![
        case_at("a", 0, 40.0, -90.0),
        case_at("b", 1, 40.0, -90.0),
        case_at("a", 2, 40.0, -90.0),
    ];
    let err = infer_network(&cases, 0.05, 30, 100.0).unwrap_err();
    assert!(matches!(
        err,
        OutbreakError::Transmission(TransmissionError::DuplicateCaseId { ref case_id }) if case_id == "a"
    ));
}

// =============================================================================
// Link inference
// =============================================================================

#[test]
fn same_day_cases_are_never_linked() {
    let cases = vec![case_at("a", 0, 40.0, -90.0), case_at("b", 0, 40.0, -90.0)];
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    assert!(network.links.is_empty());
    assert!(network.clusters.is_empty());
    assert!(network.index_cases.is_empty());
    assert_eq!(network.network_metrics.component_count, 2);
    assert_eq!(network.max_temporal_distance_days, None);
}

#[test]
fn window_boundary_is_inclusive() {
    let cases = vec![case_at("a", 0, 40.0, -90.0), case_at("b", 30, 40.0, -90.0)];
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    assert_eq!(network.links.len(), 1);
    // Temporal proximity is zero at the edge of the window; spatial is one.
    assert!((network.links[0].likelihood - 0.5).abs() < 1e-9);

    let network = infer_network(&cases, 0.05, 29, 100.0).unwrap();
    assert!(network.links.is_empty());
}

#[test]
fn distant_cases_are_not_linked() {
    // Roughly 111 km apart along a meridian.
    let cases = vec![case_at("a", 0, 40.0, -90.0), case_at("b", 2, 41.0, -90.0)];
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    assert!(network.links.is_empty());

    let network = infer_network(&cases, 0.05, 30, 150.0).unwrap();
    assert_eq!(network.links.len(), 1);
    assert!((network.links[0].distance_km - 111.19).abs() < 0.5);
}

#[test]
fn unlocatable_case_is_never_linked() {
    let cases = vec![
        case_at("a", 0, f64::NAN, -90.0),
        case_at("b", 2, 40.0, -90.0),
        case_at("c", 3, 40.01, -90.0),
    ];
    let network = infer_network(&cases, 0.05, 30, 10.0).unwrap();

    assert_eq!(network.links.len(), 1);
    assert_eq!(network.links[0].source, "b");
    assert_eq!(network.links[0].target, "c");
    for link in &network.links {
        assert!(link.distance_km <= 10.0);
        assert!((0.0..=1.0).contains(&link.likelihood));
    }
}

#[test]
fn genetic_evidence_only_applies_when_both_sequenced() {
    let cases = vec![
        case_at("a", 0, 40.0, -90.0).with_sequence("AAAAAAAAAA"),
        case_at("b", 1, 40.0, -90.0).with_sequence("TTTTTTTTTT"),
        case_at("c", 2, 40.0, -90.0),
    ];
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let pairs: Vec<(&str, &str)> = network
        .links
        .iter()
        .map(|l| (l.source.as_str(), l.target.as_str()))
        .collect();
    assert_eq!(pairs, vec![("a", "c"), ("b", "c")]);
    assert!(network.links.iter().all(|l| l.genetic_distance.is_none()));
}

#[test]
fn every_link_points_forward_within_thresholds() {
    let cases: Vec<Case> = (0..12)
        .map(|i| case_at(&format!("c{i}"), (i * 3) as u64, 40.0 + i as f64 * 0.1, -90.0))
        .collect();
    let t = thresholds();
    let network = infer_network(&cases, t.genetic_threshold, t.temporal_window_days, t.spatial_threshold_km)
        .unwrap();

    assert!(!network.links.is_empty());
    for link in &network.links {
        assert_ne!(link.source, link.target);
        assert!(link.days_apart > 0 && link.days_apart <= t.temporal_window_days);
        assert!(link.distance_km <= t.spatial_threshold_km);
        assert!((0.0..=1.0).contains(&link.likelihood));
    }
}

#[test]
fn inference_is_idempotent_and_order_independent() {
    let cases = vec![
        case_at("a", 0, 40.0, -90.0),
        case_at("b", 2, 40.1, -90.0),
        case_at("c", 4, 40.2, -90.1),
        case_at("d", 9, 40.0, -90.2),
    ];
    let mut reversed = cases.clone();
    reversed.reverse();

    let first = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let second = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    assert_eq!(first, second);

    let from_reversed = infer_network(&reversed, 0.05, 30, 100.0).unwrap();
    assert_eq!(first.links, from_reversed.links);
    assert_eq!(first.nodes, from_reversed.nodes);
}

// =============================================================================
// Metrics and rankings
// =============================================================================

#[test]
fn star_outbreak_has_one_index_case_and_superspreader() {
    let mut cases = vec![case_at("hub", 0, 40.0, -90.0)];
    // Spokes are far from each other but within reach of the hub.
    for (i, (lat, lon)) in [(40.3, -90.0), (39.7, -90.0), (40.0, -89.6), (40.0, -90.4)]
        .into_iter()
        .enumerate()
    {
        cases.push(case_at(&format!("s{i}"), 5, lat, lon));
    }
    let network = infer_network(&cases, 0.05, 30, 40.0).unwrap();

    assert_eq!(network.links.len(), 4);
    assert_eq!(network.index_cases.len(), 1);
    let index = &network.index_cases[0];
    assert_eq!(index.case_id, "hub");
    assert_eq!(index.outbreak_size, 4);
    assert!((index.temporal_priority - 1.0).abs() < 1e-12);
    assert!((index.index_score - (4.0 * 0.7 + 0.3)).abs() < 1e-9);

    assert_eq!(network.superspreaders.len(), 1);
    let spreader = &network.superspreaders[0];
    assert_eq!(spreader.case_id, "hub");
    assert_eq!(spreader.outgoing_links, 4);
    assert_eq!(spreader.betweenness, Some(0.0));

    let m = &network.network_metrics;
    assert_eq!(m.largest_component_size, 5);
    assert!((m.max_out_degree_centrality - 1.0).abs() < 1e-12);
    assert!((m.max_in_degree_centrality - 0.25).abs() < 1e-12);
    // Undirected: hub-spoke pairs at 1, spoke-spoke pairs at 2.
    let expected_apl = (4.0 * 1.0 + 6.0 * 2.0) / 10.0;
    assert!((m.average_path_length.unwrap() - expected_apl).abs() < 1e-9);
}

#[test]
fn chain_gives_middle_node_betweenness() {
    // Only consecutive cases are close enough to link.
    let cases = vec![
        case_at("a", 0, 40.0, -90.0),
        case_at("b", 3, 40.3, -90.0),
        case_at("c", 6, 40.6, -90.0),
    ];
    let network = infer_network(&cases, 0.05, 30, 40.0).unwrap();
    assert_eq!(network.links.len(), 2);

    let m = &network.network_metrics;
    assert!((m.max_betweenness_centrality - 0.5).abs() < 1e-12);
    assert_eq!(m.min_betweenness_centrality, 0.0);

    let cluster = &network.clusters[0];
    assert_eq!(cluster.central_nodes.highest_betweenness, "b");
    assert_eq!(cluster.central_nodes.highest_in_degree, "b");
    assert!(network.superspreaders.is_empty());
}

// =============================================================================
// Pattern assessment
// =============================================================================

#[test]
fn single_large_cluster_is_common_source() {
    let cases: Vec<Case> = (0..6)
        .map(|i| case_at(&format!("c{i}"), i as u64, 40.0, -90.0))
        .collect();
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let pattern = assess_pattern(&network);

    assert_eq!(pattern.pattern_type, PatternType::CommonSource);
    assert_eq!(pattern.cluster_count, 1);
    assert!(pattern.superspreading_evidence);
    assert_eq!(pattern.geographic_focus, GeographicFocus::Local);
    assert_eq!(pattern.temporal_pattern, TemporalPattern::Rapid);
    assert_eq!(pattern.intervention_recommendations.priority_level, PriorityLevel::VeryHigh);
}

#[test]
fn unlinked_network_has_unknown_temporal_pattern() {
    let cases = vec![case_at("a", 0, 40.0, -90.0), case_at("b", 0, 10.0, 10.0)];
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let pattern = assess_pattern(&network);

    assert_eq!(pattern.pattern_type, PatternType::Sporadic);
    assert_eq!(pattern.temporal_pattern, TemporalPattern::Unknown);
    assert_eq!(pattern.average_links_per_case, 0.0);
    assert!(!pattern.superspreading_evidence);
    assert_eq!(pattern.intervention_recommendations.priority_level, PriorityLevel::Standard);
}

#[test]
fn long_links_make_focus_regional() {
    let cases = vec![
        case_at("a", 0, 40.0, -90.0),
        case_at("b", 20, 41.0, -90.0),
    ];
    let network = infer_network(&cases, 0.05, 30, 200.0).unwrap();
    let pattern = assess_pattern(&network);
    assert_eq!(pattern.geographic_focus, GeographicFocus::Regional);
    assert_eq!(pattern.temporal_pattern, TemporalPattern::Moderate);
}

// =============================================================================
// Trajectory
// =============================================================================

#[test]
fn trajectory_projects_requested_days() {
    let cases: Vec<Case> = (0..10)
        .map(|i| case_at(&format!("c{i}"), i as u64, 40.0, -90.0))
        .collect();
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let projection = predict_trajectory(&network, &cases, 21, None).unwrap();

    assert_eq!(projection.daily_projections.len(), 21);
    assert_eq!(projection.as_of, day(9));
    assert_eq!(projection.daily_projections[0].date, day(10));
    assert_eq!(projection.confidence_level, "moderate");
    // 45 links over 10 nodes.
    assert!((projection.reproduction_number - 4.5).abs() < 1e-12);
    // No cases before the recent window, so no growth signal.
    assert_eq!(projection.growth_rate, 0.0);

    for (i, p) in projection.daily_projections.iter().enumerate() {
        assert_eq!(p.day, i as u32 + 1);
        assert!((p.uncertainty - 0.1 * (i as f64 + 1.0)).abs() < 1e-12);
    }
    let last = projection.daily_projections.last().unwrap();
    assert!(last.cumulative_projected_cases > 10.0);
}

#[test]
fn trajectory_growth_rate_compares_windows() {
    // Two cases in the prior window, four in the recent one.
    let offsets = [0u64, 5, 20, 22, 25, 28];
    let cases: Vec<Case> = offsets
        .iter()
        .enumerate()
        .map(|(i, &o)| case_at(&format!("c{i}"), o, 40.0, -90.0))
        .collect();
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let projection = predict_trajectory(&network, &cases, 7, Some(day(28))).unwrap();
    assert!((projection.growth_rate - 1.0).abs() < 1e-12);
}

#[test]
fn trajectory_blends_growth_early_and_reproduction_late() {
    // 15 links over 6 nodes: R = 2.5, mean interval 202 / 15 days.
    // Four recent cases against two prior ones: growth 1.0.
    let offsets = [0u64, 5, 20, 22, 25, 28];
    let cases: Vec<Case> = offsets
        .iter()
        .enumerate()
        .map(|(i, &o)| case_at(&format!("c{i}"), o, 40.0, -90.0))
        .collect();
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let projection = predict_trajectory(&network, &cases, 20, Some(day(28))).unwrap();

    let r: f64 = 2.5;
    let interval = 202.0 / 15.0;
    assert!((projection.reproduction_number - r).abs() < 1e-12);
    assert!((projection.average_transmission_interval_days - interval).abs() < 1e-12);

    // Day 1: weight 13/14 on growth, 1/14 on reproduction.
    let w = 13.0 / 14.0;
    let day1 = 4.0 * 2f64.powf(1.0 / 14.0) * w + 4.0 * r.powf(1.0 / interval) * (1.0 - w);
    let first = &projection.daily_projections[0];
    assert_eq!(first.cumulative_projected_cases, 4.2);
    assert_eq!(first.cumulative_projected_cases, (day1 * 10.0).round() / 10.0);
    assert_eq!(first.projected_new_cases, 0.2);

    // Day 20 is past the growth window: reproduction only.
    let day20 = 4.0 * r.powf(20.0 / interval);
    let last = &projection.daily_projections[19];
    assert_eq!(last.day, 20);
    assert_eq!(last.cumulative_projected_cases, 15.6);
    assert_eq!(last.cumulative_projected_cases, (day20 * 10.0).round() / 10.0);
    assert!((last.uncertainty - 2.0).abs() < 1e-12);
}

#[test]
fn zero_day_trajectory_is_empty() {
    let cases = vec![case_at("a", 0, 40.0, -90.0), case_at("b", 1, 40.0, -90.0)];
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let projection = predict_trajectory(&network, &cases, 0, None).unwrap();
    assert!(projection.daily_projections.is_empty());
    assert_eq!(projection.total_projected_new_cases, 0.0);
}

// =============================================================================
// Engine and combined analysis
// =============================================================================

#[test]
fn engine_uses_configured_thresholds() {
    let cases = vec![case_at("a", 0, 40.0, -90.0), case_at("b", 2, 41.0, -90.0)];

    let strict = TransmissionEngine::new();
    assert!(strict.infer_network(&cases).unwrap().links.is_empty());

    let relaxed = TransmissionEngine::with_config(TransmissionConfig {
        spatial_threshold_km: 150.0,
        ..TransmissionConfig::default()
    });
    assert_eq!(relaxed.infer_network(&cases).unwrap().links.len(), 1);
    assert_eq!(relaxed.thresholds().spatial_threshold_km, 150.0);
}

#[test]
fn analyze_dynamics_combines_all_stages() {
    let cases: Vec<Case> = (0..5)
        .map(|i| case_at(&format!("c{i}"), (i * 2) as u64, 40.0, -90.0))
        .collect();
    let analysis = analyze_dynamics(&cases, thresholds(), 14).unwrap();

    assert_eq!(analysis.transmission_network.cases, 5);
    assert_eq!(analysis.trajectory.days_ahead, 14);
    assert_eq!(
        analysis.pattern_assessment.cluster_count,
        analysis.transmission_network.clusters.len()
    );

    let engine = TransmissionEngine::new();
    let via_engine = engine.analyze_dynamics(&cases).unwrap();
    assert_eq!(via_engine.trajectory.days_ahead, 14);
}

#[test]
fn network_serializes_with_snake_case_fields() {
    let cases = vec![case_at("a", 0, 40.0, -90.0), case_at("b", 1, 40.0, -90.0)];
    let network = infer_network(&cases, 0.05, 30, 100.0).unwrap();
    let json = serde_json::to_value(&network).unwrap();
    assert!(json["network_metrics"]["node_count"].is_u64());
    assert_eq!(json["links"][0]["source"], "a");
    assert_eq!(json["clusters"][0]["id"], "cluster_1");
}
