/// Transmission network inference errors.
#[derive(Debug, thiserror::Error)]
pub enum TransmissionError {
    #[error("insufficient data: need at least {required} cases, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid threshold {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("duplicate case id: {case_id}")]
    DuplicateCaseId { case_id: String },
}
