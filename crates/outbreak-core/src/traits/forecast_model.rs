use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::OutbreakResult;
use crate::models::{Case, ConnectivityTable, ForecastResult, GeoPoint, Region, TradeVolume};

/// Extra inputs to [`IForecastModel::fit`].
#[derive(Debug, Clone, Default)]
pub struct FitContext {
    /// Region-to-region weights. Required by network-propagation models.
    pub connectivity: Option<ConnectivityTable>,
}

impl FitContext {
    pub fn with_connectivity(connectivity: ConnectivityTable) -> Self {
        Self {
            connectivity: Some(connectivity),
        }
    }
}

/// Extra inputs to [`IForecastModel::predict`].
#[derive(Debug, Clone, Default)]
pub struct PredictContext {
    /// Reference date. Defaults to the latest detection among the supplied cases.
    pub as_of: Option<NaiveDate>,
    /// Environmental suitability per region in [0, 1].
    pub environmental_factors: BTreeMap<String, f64>,
    /// Seasonal multiplier for migration networks.
    pub seasonal_factor: Option<f64>,
    pub trade_volume: Option<TradeVolume>,
    /// Additional points to evaluate, for models that support it.
    pub prediction_grid: Vec<GeoPoint>,
}

impl PredictContext {
    pub fn as_of(date: NaiveDate) -> Self {
        Self {
            as_of: Some(date),
            ..Self::default()
        }
    }

    /// `as_of`, or the latest detection date in `cases`.
    pub fn reference_date(&self, cases: &[Case]) -> Option<NaiveDate> {
        self.as_of
            .or_else(|| cases.iter().map(|c| c.detection_date).max())
    }
}

/// A spread-prediction model.
///
/// Each instance owns its fitted parameters; nothing is shared between models.
pub trait IForecastModel: Send + Sync {
    /// Short model family name, used to build generated ids.
    fn name(&self) -> &str;

    fn is_fitted(&self) -> bool;

    /// Learn parameters from historical cases. Replaces any earlier fit.
    fn fit(&mut self, cases: &[Case], regions: &[Region], ctx: &FitContext) -> OutbreakResult<()>;

    /// Forecast `days_ahead` days for every region with usable geometry.
    fn predict(
        &self,
        cases: &[Case],
        regions: &[Region],
        days_ahead: u32,
        ctx: &PredictContext,
    ) -> OutbreakResult<ForecastResult>;

    /// An unfitted model with the same hyperparameters.
    fn fresh(&self) -> Box<dyn IForecastModel>;
}
