//! Outbreak pattern classification and intervention recommendations.

use outbreak_core::models::{
    GeographicFocus, InterventionRecommendations, PatternAssessment, PatternType, PriorityLevel,
    TemporalPattern, TransmissionIntensity, TransmissionNetwork,
};

// --- Pattern type ---
pub const COMMON_SOURCE_MIN_CASES: usize = 5;
pub const INTRODUCTION_MIN_CLUSTER_SIZE: usize = 3;
pub const SUSTAINED_LINKS_PER_CASE: f64 = 1.2;

// --- Geographic focus (km) ---
pub const WIDESPREAD_MAX_KM: f64 = 300.0;
pub const REGIONAL_MAX_KM: f64 = 100.0;
pub const REGIONAL_MEAN_KM: f64 = 50.0;

// --- Temporal pattern (days) ---
pub const RAPID_MAX_DAYS: i64 = 14;
pub const MODERATE_MAX_DAYS: i64 = 30;

/// Classify a network and recommend interventions.
pub fn assess_pattern(network: &TransmissionNetwork) -> PatternAssessment {
    let metrics = &network.network_metrics;
    let average_links = if metrics.node_count > 0 {
        metrics.edge_count as f64 / metrics.node_count as f64
    } else {
        0.0
    };

    let pattern_type = classify_pattern(network, average_links);
    let geographic_focus = geographic_focus(network);
    let temporal_pattern = temporal_pattern(network.max_temporal_distance_days);

    PatternAssessment {
        pattern_type,
        geographic_focus,
        temporal_pattern,
        transmission_intensity: transmission_intensity(average_links),
        superspreading_evidence: !network.superspreaders.is_empty(),
        cluster_count: network.clusters.len(),
        average_links_per_case: average_links,
        intervention_recommendations: recommend_interventions(
            pattern_type,
            geographic_focus,
            temporal_pattern,
        ),
    }
}

fn classify_pattern(network: &TransmissionNetwork, average_links: f64) -> PatternType {
    let clusters = &network.clusters;
    if clusters.len() == 1 && network.network_metrics.node_count > COMMON_SOURCE_MIN_CASES {
        PatternType::CommonSource
    } else if clusters.len() > 1
        && clusters
            .iter()
            .any(|c| c.metrics.size > INTRODUCTION_MIN_CLUSTER_SIZE)
    {
        PatternType::MultipleIntroductions
    } else if average_links > SUSTAINED_LINKS_PER_CASE {
        PatternType::SustainedTransmission
    } else {
        PatternType::Sporadic
    }
}

fn geographic_focus(network: &TransmissionNetwork) -> GeographicFocus {
    if network.links.is_empty() {
        return GeographicFocus::Local;
    }
    let max = network
        .links
        .iter()
        .map(|l| l.distance_km)
        .fold(0.0, f64::max);
    let mean =
        network.links.iter().map(|l| l.distance_km).sum::<f64>() / network.links.len() as f64;

    if max > WIDESPREAD_MAX_KM {
        GeographicFocus::Widespread
    } else if max > REGIONAL_MAX_KM || mean > REGIONAL_MEAN_KM {
        GeographicFocus::Regional
    } else {
        GeographicFocus::Local
    }
}

/// From the longest link interval; `Unknown` when there are no links.
pub fn temporal_pattern(max_days: Option<i64>) -> TemporalPattern {
    match max_days {
        None => TemporalPattern::Unknown,
        Some(d) if d < RAPID_MAX_DAYS => TemporalPattern::Rapid,
        Some(d) if d < MODERATE_MAX_DAYS => TemporalPattern::Moderate,
        Some(_) => TemporalPattern::Extended,
    }
}

pub fn transmission_intensity(average_links: f64) -> TransmissionIntensity {
    if average_links < 0.5 {
        TransmissionIntensity::Low
    } else if average_links < 1.0 {
        TransmissionIntensity::Moderate
    } else {
        TransmissionIntensity::High
    }
}

/// Fixed action table keyed by pattern, adjusted for spread and speed.
pub fn recommend_interventions(
    pattern_type: PatternType,
    geographic_focus: GeographicFocus,
    temporal_pattern: TemporalPattern,
) -> InterventionRecommendations {
    let (mut surveillance, mut control, mut priority) = match pattern_type {
        PatternType::CommonSource => (
            actions(&["Intensive source investigation", "Environmental sampling"]),
            actions(&["Source-targeted control measures"]),
            PriorityLevel::High,
        ),
        PatternType::MultipleIntroductions => (
            actions(&["Wild bird surveillance", "Import pathway monitoring"]),
            actions(&["Border biosecurity enhancement"]),
            PriorityLevel::High,
        ),
        PatternType::SustainedTransmission => (
            actions(&["Contact tracing", "Expanded ring surveillance"]),
            actions(&["Movement restrictions", "Enhanced farm biosecurity"]),
            PriorityLevel::VeryHigh,
        ),
        PatternType::Sporadic => (
            actions(&["Routine surveillance"]),
            actions(&["Standard biosecurity measures"]),
            PriorityLevel::Standard,
        ),
    };

    if geographic_focus == GeographicFocus::Widespread {
        surveillance.push("Multi-jurisdictional coordination".to_string());
        control.push("Regional movement controls".to_string());
        priority = priority.escalate();
    }

    if temporal_pattern == TemporalPattern::Rapid {
        surveillance.push("Daily reporting".to_string());
        control.push("Urgent response measures".to_string());
        priority = PriorityLevel::VeryHigh;
    }

    InterventionRecommendations {
        surveillance,
        control,
        priority_level: priority,
    }
}

fn actions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
