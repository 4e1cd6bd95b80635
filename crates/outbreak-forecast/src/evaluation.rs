//! Rolling-window backtests.
//!
//! Windows are `window_days` calendar days long and start at each distinct
//! test date, as long as the window ends on or before the last test date.
//! For every window a model is refitted from scratch on historical cases
//! strictly before the window and asked to forecast the whole window.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use outbreak_core::models::{Case, EvaluationRecord, ForecastResult, Region};
use outbreak_core::traits::{FitContext, IForecastModel, PredictContext};
use outbreak_geo::stats::{error_summary, mean};
use outbreak_observability::events;

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacktestWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BacktestWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1).max(0) as u32
    }
}

/// Accuracy of one model in one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowScore {
    pub rmse: f64,
    pub mae: f64,
    pub bias: f64,
    pub calibration: Option<f64>,
    pub sharpness: Option<f64>,
}

/// Shared inputs for every model's backtest.
#[derive(Debug)]
pub struct Backtest<'a> {
    pub windows: Vec<BacktestWindow>,
    pub historical: &'a [Case],
    pub regions: &'a [Region],
    /// Actual counts per region per window, aligned with `windows`.
    pub actuals: Vec<BTreeMap<String, f64>>,
    pub lookback_days: i64,
    pub fit_ctx: &'a FitContext,
    pub predict_ctx: &'a PredictContext,
}

impl<'a> Backtest<'a> {
    pub fn new(
        test_cases: &[Case],
        historical: &'a [Case],
        regions: &'a [Region],
        window_days: u32,
        lookback_days: i64,
        fit_ctx: &'a FitContext,
        predict_ctx: &'a PredictContext,
    ) -> Self {
        let windows = backtest_windows(test_cases, window_days);
        let actuals = windows
            .iter()
            .map(|w| actual_counts(test_cases, w))
            .collect();
        Self {
            windows,
            historical,
            regions,
            actuals,
            lookback_days,
            fit_ctx,
            predict_ctx,
        }
    }

    /// Backtest a fresh copy of `template`. `None` when no window could be scored.
    pub fn run(&self, model_id: &str, template: &dyn IForecastModel) -> Option<EvaluationRecord> {
        let mut scores = Vec::with_capacity(self.windows.len());
        for (window, actual) in self.windows.iter().zip(&self.actuals) {
            match self.run_window(template, window, actual) {
                Ok(Some(score)) => scores.push(score),
                Ok(None) => {}
                Err(e) => events::model_failed(model_id, "evaluate", &e.to_string()),
            }
        }
        average(&scores)
    }

    fn run_window(
        &self,
        template: &dyn IForecastModel,
        window: &BacktestWindow,
        actual: &BTreeMap<String, f64>,
    ) -> outbreak_core::OutbreakResult<Option<WindowScore>> {
        let training: Vec<Case> = self
            .historical
            .iter()
            .filter(|c| c.detection_date < window.start)
            .cloned()
            .collect();

        let mut model = template.fresh();
        model.fit(&training, self.regions, self.fit_ctx)?;

        let lookback_start = window.start - Days::new(self.lookback_days.max(0) as u64);
        let recent: Vec<Case> = training
            .into_iter()
            .filter(|c| c.detection_date >= lookback_start)
            .collect();
        let ctx = PredictContext {
            as_of: window.start.pred_opt(),
            ..self.predict_ctx.clone()
        };
        let prediction = model.predict(&recent, self.regions, window.days(), &ctx)?;
        Ok(score_window(&prediction, actual, self.regions))
    }
}

/// Windows starting at each distinct test date that fit inside the test period.
pub fn backtest_windows(test_cases: &[Case], window_days: u32) -> Vec<BacktestWindow> {
    if window_days == 0 {
        return Vec::new();
    }
    let mut dates: Vec<NaiveDate> = test_cases.iter().map(|c| c.detection_date).collect();
    dates.sort();
    dates.dedup();
    let Some(&last) = dates.last() else {
        return Vec::new();
    };
    let span = Days::new(u64::from(window_days) - 1);
    dates
        .into_iter()
        .map(|start| BacktestWindow {
            start,
            end: start + span,
        })
        .take_while(|w| w.end <= last)
        .collect()
}

/// Test cases per region inside `window`. Cases without a region are ignored.
pub fn actual_counts(test_cases: &[Case], window: &BacktestWindow) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for case in test_cases.iter().filter(|c| window.contains(c.detection_date)) {
        if let Some(region) = &case.region_id {
            *counts.entry(region.clone()).or_insert(0.0) += 1.0;
        }
    }
    counts
}

/// Compare a prediction with actual counts over every region.
///
/// Regions missing from either side count as zero. `None` without regions.
pub fn score_window(
    prediction: &ForecastResult,
    actual: &BTreeMap<String, f64>,
    regions: &[Region],
) -> Option<WindowScore> {
    if regions.is_empty() {
        return None;
    }
    let mut predicted = Vec::with_capacity(regions.len());
    let mut observed = Vec::with_capacity(regions.len());
    let mut coverage = Vec::new();
    let mut widths = Vec::new();

    for region in regions {
        let a = actual.get(&region.id).copied().unwrap_or(0.0);
        let p = prediction
            .predicted_case_count
            .get(&region.id)
            .copied()
            .unwrap_or(0.0);
        predicted.push(p);
        observed.push(a);
        if let Some(ci) = prediction.confidence_intervals.get(&region.id) {
            coverage.push(if ci.contains(a) { 1.0 } else { 0.0 });
            widths.push(ci.width());
        }
    }

    let summary = error_summary(&predicted, &observed);
    Some(WindowScore {
        rmse: summary.rmse,
        mae: summary.mae,
        bias: summary.bias,
        calibration: (!coverage.is_empty()).then(|| mean(&coverage)),
        sharpness: (!widths.is_empty()).then(|| mean(&widths)),
    })
}

/// Average window scores into a record. `None` for no scores.
pub fn average(scores: &[WindowScore]) -> Option<EvaluationRecord> {
    if scores.is_empty() {
        return None;
    }
    let field = |f: fn(&WindowScore) -> f64| mean(&scores.iter().map(f).collect::<Vec<_>>());
    let optional = |f: fn(&WindowScore) -> Option<f64>| {
        let values: Vec<f64> = scores.iter().filter_map(f).collect();
        (!values.is_empty()).then(|| mean(&values))
    };
    Some(EvaluationRecord {
        rmse: field(|s| s.rmse),
        mae: field(|s| s.mae),
        bias: field(|s| s.bias),
        calibration: optional(|s| s.calibration),
        sharpness: optional(|s| s.sharpness),
        windows: scores.len(),
    })
}
