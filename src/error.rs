use thiserror::Error;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("invalid measurement for slide {index}: left={left}, width={width}")]
    InvalidSlideMeasure { index: usize, left: f64, width: f64 },

    #[error("invalid measurement: {0}")]
    InvalidMeasure(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
