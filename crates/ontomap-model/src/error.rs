use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("similarity threshold must be within [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),
    #[error("top-n must be at least 1")]
    InvalidTopN,
}
