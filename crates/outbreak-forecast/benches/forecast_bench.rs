use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};

use outbreak_core::config::OutbreakConfig;
use outbreak_core::models::{Case, Region};
use outbreak_core::traits::{FitContext, PredictContext};
use outbreak_forecast::ForecastManager;

/// A 5x5 grid of regions half a degree apart.
fn build_regions() -> Vec<Region> {
    (0..25)
        .map(|i| {
            let lat = 40.0 + (i / 5) as f64 * 0.5;
            let lon = -93.0 + (i % 5) as f64 * 0.5;
            Region::new(format!("region-{i}")).with_centroid(lat, lon)
        })
        .collect()
}

/// Cases over ~60 days, assigned round-robin to the regions.
fn build_cases(n: usize) -> Vec<Case> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let region = i * 7 % 25;
            let lat = 40.0 + (region / 5) as f64 * 0.5;
            let lon = -93.0 + (region % 5) as f64 * 0.5;
            Case::new(format!("case-{i}"), lat, lon, base + Days::new((i % 60) as u64))
                .with_region(format!("region-{region}"))
        })
        .collect()
}

fn bench_train_default_models(c: &mut Criterion) {
    let cases = build_cases(200);
    let regions = build_regions();
    c.bench_function("train_default_models_200_cases", |b| {
        b.iter(|| {
            let mut manager = ForecastManager::with_default_models(&OutbreakConfig::default());
            manager.train_models(&cases, &regions, &FitContext::default())
        });
    });
}

fn bench_ensemble_forecast(c: &mut Criterion) {
    let cases = build_cases(200);
    let regions = build_regions();
    let mut manager = ForecastManager::with_default_models(&OutbreakConfig::default());
    manager.train_models(&cases, &regions, &FitContext::default());
    let ctx = PredictContext::default();
    c.bench_function("ensemble_forecast_25_regions", |b| {
        b.iter(|| manager.forecast(&cases, &regions, &ctx).unwrap());
    });
}

criterion_group!(benches, bench_train_default_models, bench_ensemble_forecast);
criterion_main!(benches);
