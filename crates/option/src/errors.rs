/// Result type alias for extracting from an [`Optional`](crate::Optional)
pub type Result<T> = std::result::Result<T, AbsentError>;

/// Returned when a value is extracted from an absent container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unwrapped absent value")]
pub struct AbsentError;
