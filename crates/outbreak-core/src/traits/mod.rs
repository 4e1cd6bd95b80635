mod forecast_model;

pub use forecast_model::{FitContext, IForecastModel, PredictContext};
