//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed network inference.
pub fn network_inferred(case_count: usize, link_count: usize, cluster_count: usize) {
    tracing::info!(
        event = "network_inferred",
        case_count = case_count,
        link_count = link_count,
        cluster_count = cluster_count,
        "transmission network inferred"
    );
}

/// Log a successfully fitted model.
pub fn model_trained(model_id: &str, case_count: usize) {
    tracing::info!(
        event = "model_trained",
        model_id = %model_id,
        case_count = case_count,
        "model trained"
    );
}

/// Log a model that failed to fit or predict and was skipped.
pub fn model_failed(model_id: &str, stage: &str, error: &str) {
    tracing::warn!(
        event = "model_failed",
        model_id = %model_id,
        stage = %stage,
        error = %error,
        "model skipped"
    );
}

/// Log a replaced ensemble weight table.
pub fn weights_updated(weights: &[(String, f64)]) {
    tracing::info!(
        event = "weights_updated",
        weights = ?weights,
        "ensemble weights updated"
    );
}
