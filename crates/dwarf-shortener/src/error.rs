use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("char floor must be at least 1")]
    ZeroFloor,
    #[error("max length {max_length} is below the char floor {char_floor}")]
    MaxBelowFloor { char_floor: usize, max_length: usize },
}
