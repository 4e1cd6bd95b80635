//! Property tests for outbreak-transmission: link invariants, acyclicity,
//! determinism, ranking eligibility.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use outbreak_core::models::{Case, InferenceThresholds};
use outbreak_transmission::graph::{components, dag_enforcement, TransmissionGraph};
use outbreak_transmission::inference::LinkInference;
use outbreak_transmission::infer_network_with;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Cases scattered over a few degrees and about two months.
fn case_strategy() -> impl Strategy<Value = Vec<Case>> {
    prop::collection::vec(
        (
            0u64..60,
            40.0_f64..42.0,
            -92.0_f64..-90.0,
            prop::option::of("[ACGT]{12}"),
        ),
        2..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (offset, lat, lon, seq))| {
                let case = Case::new(format!("c{i}"), lat, lon, base_date() + Days::new(offset));
                match seq {
                    Some(s) => case.with_sequence(s),
                    None => case,
                }
            })
            .collect()
    })
}

fn threshold_strategy() -> impl Strategy<Value = InferenceThresholds> {
    (0.0_f64..0.5, 1i64..45, 1.0_f64..250.0).prop_map(|(g, w, s)| InferenceThresholds {
        genetic_threshold: g,
        temporal_window_days: w,
        spatial_threshold_km: s,
    })
}

// =============================================================================
// Every link satisfies the thresholds it was inferred with
// =============================================================================
proptest! {
    #[test]
    fn links_respect_thresholds(cases in case_strategy(), t in threshold_strategy()) {
        let network = infer_network_with(&cases, t).unwrap();
        for link in &network.links {
            prop_assert!(link.source != link.target);
            prop_assert!(link.days_apart > 0);
            prop_assert!(link.days_apart <= t.temporal_window_days);
            prop_assert!(link.distance_km <= t.spatial_threshold_km);
            if let Some(g) = link.genetic_distance {
                prop_assert!(g <= t.genetic_threshold);
            }
            prop_assert!((0.0..=1.0).contains(&link.likelihood));
        }
    }
}

// =============================================================================
// The inferred graph is always acyclic
// =============================================================================
proptest! {
    #[test]
    fn inferred_graph_is_acyclic(cases in case_strategy(), t in threshold_strategy()) {
        let mut sorted = cases.clone();
        sorted.sort_by_key(|c| c.detection_date);
        let links = LinkInference::new(t).infer_links(&sorted);
        let graph = TransmissionGraph::build(&sorted, links);
        prop_assert!(dag_enforcement::is_acyclic(&graph));
        prop_assert!(dag_enforcement::find_cycles(&graph).is_empty());
    }
}

// =============================================================================
// Inference is a pure function of its input
// =============================================================================
proptest! {
    #[test]
    fn inference_is_deterministic(cases in case_strategy(), t in threshold_strategy()) {
        let a = infer_network_with(&cases, t).unwrap();
        let b = infer_network_with(&cases, t).unwrap();
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Components partition the nodes; clusters cover components of size >= 2
// =============================================================================
proptest! {
    #[test]
    fn components_partition_nodes(cases in case_strategy(), t in threshold_strategy()) {
        let mut sorted = cases.clone();
        sorted.sort_by_key(|c| c.detection_date);
        let links = LinkInference::new(t).infer_links(&sorted);
        let graph = TransmissionGraph::build(&sorted, links);
        let comps = components::weakly_connected_components(&graph);

        let total: usize = comps.iter().map(Vec::len).sum();
        prop_assert_eq!(total, graph.node_count());

        let network = infer_network_with(&cases, t).unwrap();
        let expected_clusters = comps.iter().filter(|c| c.len() >= 2).count();
        prop_assert_eq!(network.clusters.len(), expected_clusters);
        prop_assert_eq!(network.network_metrics.component_count, comps.len());
    }
}

// =============================================================================
// Ranking eligibility and ordering
// =============================================================================
proptest! {
    #[test]
    fn rankings_are_eligible_and_sorted(cases in case_strategy(), t in threshold_strategy()) {
        let network = infer_network_with(&cases, t).unwrap();

        for candidate in &network.index_cases {
            prop_assert!(!network.links.iter().any(|l| l.target == candidate.case_id));
            prop_assert!(candidate.outbreak_size > 0);
            prop_assert!(candidate.temporal_priority >= 0.1 && candidate.temporal_priority <= 1.0);
        }
        for pair in network.index_cases.windows(2) {
            prop_assert!(pair[0].index_score >= pair[1].index_score);
        }

        for candidate in &network.superspreaders {
            let out = network.links.iter().filter(|l| l.source == candidate.case_id).count();
            prop_assert_eq!(out, candidate.outgoing_links);
            prop_assert!(out > 1);
        }
        for pair in network.superspreaders.windows(2) {
            prop_assert!(pair[0].superspreader_score >= pair[1].superspreader_score);
        }

        let m = &network.network_metrics;
        prop_assert!(m.density >= 0.0 && m.density <= 1.0);
        prop_assert!(m.max_betweenness_centrality <= 1.0 + 1e-9);
        prop_assert!(m.min_betweenness_centrality <= m.max_betweenness_centrality + 1e-12);
    }
}
