/// Result alias used by every fallible engine call.
pub type Result<T> = std::result::Result<T, IsingError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IsingError {
    /// A call-boundary argument was out of domain (lattice size, β, spin value, rule name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
