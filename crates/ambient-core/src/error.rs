use thiserror::Error;

/// Failures the ambient effects can report to their host.
///
/// None of these are fatal: the web front-end logs them and leaves the
/// effect blank or static.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmbientError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("marquee content not laid out yet (measured {measured}px)")]
    DegenerateWidth { measured: f32 },
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
}

pub type Result<T> = std::result::Result<T, AmbientError>;
