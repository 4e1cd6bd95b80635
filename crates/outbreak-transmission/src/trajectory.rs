//! Short-term case trajectory from network structure and recent growth.
//!
//! Two projections are blended per day: recent growth dominates the first
//! two weeks, the network's reproduction number dominates afterwards.

use chrono::{Days, NaiveDate};
use outbreak_core::constants::{
    DEFAULT_TRANSMISSION_INTERVAL_DAYS, GROWTH_WINDOW_DAYS, MIN_NETWORK_CASES,
};
use outbreak_core::errors::{OutbreakResult, TransmissionError};
use outbreak_core::models::{Case, DailyProjection, TrajectoryProjection, TransmissionNetwork};

/// Uncertainty added per projected day.
pub const UNCERTAINTY_PER_DAY: f64 = 0.1;
pub const CONFIDENCE_LEVEL: &str = "moderate";

/// Project `days_ahead` days past `as_of` (default: latest detection in `cases`).
pub fn predict_trajectory(
    network: &TransmissionNetwork,
    cases: &[Case],
    days_ahead: u32,
    as_of: Option<NaiveDate>,
) -> OutbreakResult<TrajectoryProjection> {
    let node_count = network.network_metrics.node_count;
    if node_count < MIN_NETWORK_CASES {
        return Err(TransmissionError::InsufficientData {
            required: MIN_NETWORK_CASES,
            actual: node_count,
        }
        .into());
    }
    let as_of = match as_of.or_else(|| cases.iter().map(|c| c.detection_date).max()) {
        Some(d) => d,
        None => {
            return Err(TransmissionError::InsufficientData {
                required: MIN_NETWORK_CASES,
                actual: 0,
            }
            .into())
        }
    };

    let reproduction_number = network.links.len() as f64 / node_count as f64;
    let average_interval = if network.links.is_empty() {
        DEFAULT_TRANSMISSION_INTERVAL_DAYS
    } else {
        network.links.iter().map(|l| l.days_apart as f64).sum::<f64>() / network.links.len() as f64
    };

    let (recent, prior) = window_counts(cases, as_of);
    let growth_rate = if recent > 0 && prior > 0 {
        (recent as f64 - prior as f64) / prior as f64
    } else {
        0.0
    };

    let recent = recent as f64;
    let window = GROWTH_WINDOW_DAYS as f64;
    let mut previous = recent;
    let mut daily_projections = Vec::with_capacity(days_ahead as usize);

    for day in 1..=days_ahead {
        let d = f64::from(day);
        let short_term_weight = (1.0 - d / window).max(0.0);
        let r_projection = if reproduction_number > 0.0 && average_interval > 0.0 {
            recent * reproduction_number.powf(d / average_interval)
        } else {
            recent
        };
        let growth_projection = recent * (1.0 + growth_rate).powf(d / window);
        let projection =
            growth_projection * short_term_weight + r_projection * (1.0 - short_term_weight);

        daily_projections.push(DailyProjection {
            day,
            date: as_of + Days::new(u64::from(day)),
            projected_new_cases: round1(projection - previous),
            cumulative_projected_cases: round1(projection),
            uncertainty: UNCERTAINTY_PER_DAY * d,
        });
        previous = projection;
    }

    let total: f64 = daily_projections.iter().map(|p| p.projected_new_cases).sum();

    Ok(TrajectoryProjection {
        reproduction_number,
        growth_rate,
        average_transmission_interval_days: average_interval,
        days_ahead,
        as_of,
        total_projected_new_cases: round1(total),
        daily_projections,
        confidence_level: CONFIDENCE_LEVEL.to_string(),
    })
}

/// Cases in `[as_of - 14, as_of]` and in the 14 days before that.
fn window_counts(cases: &[Case], as_of: NaiveDate) -> (usize, usize) {
    let recent_cutoff = as_of - Days::new(GROWTH_WINDOW_DAYS as u64);
    let prior_cutoff = recent_cutoff - Days::new(GROWTH_WINDOW_DAYS as u64);
    cases.iter().fold((0, 0), |(recent, prior), c| {
        let d = c.detection_date;
        if d >= recent_cutoff && d <= as_of {
            (recent + 1, prior)
        } else if d >= prior_cutoff && d < recent_cutoff {
            (recent, prior + 1)
        } else {
            (recent, prior)
        }
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
