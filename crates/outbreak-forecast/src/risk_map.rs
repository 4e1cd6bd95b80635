//! Bucket a forecast into risk levels per region.

use outbreak_core::models::{ForecastResult, RegionRisk, RiskLevel, RiskMap};

/// Risk level for every region in `forecast`. With `include_predictions`
/// each entry also carries the expected count and its interval.
pub fn risk_map(forecast: &ForecastResult, include_predictions: bool) -> RiskMap {
    let regions = forecast
        .risk_by_region
        .iter()
        .map(|(region_id, &risk)| {
            let (predicted_cases, confidence_interval) = if include_predictions {
                (
                    forecast.predicted_case_count.get(region_id).copied(),
                    forecast.confidence_intervals.get(region_id).copied(),
                )
            } else {
                (None, None)
            };
            let entry = RegionRisk {
                risk,
                level: RiskLevel::from_risk(risk),
                predicted_cases,
                confidence_interval,
            };
            (region_id.clone(), entry)
        })
        .collect();
    RiskMap { regions }
}
