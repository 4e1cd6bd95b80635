// Single source of truth for all default values.

// --- Transmission inference ---
pub const DEFAULT_GENETIC_THRESHOLD: f64 = 0.05;
pub const DEFAULT_TEMPORAL_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_SPATIAL_THRESHOLD_KM: f64 = 100.0;
pub const DEFAULT_TRAJECTORY_DAYS_AHEAD: u32 = 14;

// --- Forecast manager ---
pub const DEFAULT_FORECAST_DAYS_AHEAD: u32 = 7;
pub const DEFAULT_USE_ENSEMBLE: bool = true;
pub const DEFAULT_EVALUATION_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_ACTIVE_LOOKBACK_DAYS: i64 = 14;
pub const DEFAULT_MODEL_WEIGHT: f64 = 1.0;

// --- Distance-decay model ---
pub const DEFAULT_DISTANCE_DECAY: f64 = 2.0;
pub const DEFAULT_TRANSMISSION_THRESHOLD_KM: f64 = 100.0;
pub const DEFAULT_ACTIVE_WINDOW_DAYS: i64 = 14;
pub const DEFAULT_BASE_TRANSMISSION_RATE: f64 = 0.1;
pub const DEFAULT_SUBTYPE_FACTOR: f64 = 0.5;
pub const DEFAULT_DENSITY_FACTOR: f64 = 1.0;

// --- Network-propagation model ---
pub const DEFAULT_NETWORK_TYPE: &str = "migration";
pub const DEFAULT_ATTACK_RATE: f64 = 0.2;
pub const DEFAULT_SUSCEPTIBLE_FRACTION: f64 = 0.8;
pub const DEFAULT_FARM_COUNT: u32 = 10;
pub const DEFAULT_UNOBSERVED_EDGE_PROBABILITY: f64 = 0.01;
pub const DEFAULT_NOTABLE_PATH_THRESHOLD: f64 = 0.05;
pub const DEFAULT_WEEKLY_WINDOW_DAYS: i64 = 7;

// --- Gaussian-process model ---
pub const DEFAULT_SPATIAL_LENGTH_SCALE_KM: f64 = 50.0;
pub const DEFAULT_TEMPORAL_LENGTH_SCALE_DAYS: f64 = 7.0;
pub const DEFAULT_NUGGET: f64 = 0.05;
pub const DEFAULT_DAILY_CASE_CEILING: f64 = 10.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
