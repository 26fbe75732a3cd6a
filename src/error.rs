use thiserror::Error;

/// Errors surfaced by the navigation environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// Screen extents must be positive and odd so the window has a center voxel.
    #[error("invalid screen dims {0:?}: extents must be positive and odd")]
    InvalidScreenDims([usize; 3]),

    /// The location history must hold at least one entry.
    #[error("history length must be at least 1")]
    InvalidHistoryLength,

    /// Margin divisors below 3 can leave no valid start positions.
    #[error("margin divisor must be at least 3, got {0}")]
    InvalidMarginDivisor(u32),

    /// Frame stacks must keep at least one frame.
    #[error("frame stack depth must be at least 1")]
    InvalidStackDepth,

    /// The provider declared a dimensionality the environment cannot serve.
    #[error("unsupported provider dimensionality {0}, expected 2 or 3")]
    DimensionalityMismatch(usize),

    /// The provider has no samples to yield.
    #[error("volume provider has no samples")]
    ProviderExhausted,

    /// The provider yielded a sample the environment cannot use.
    #[error("volume provider failed: {0}")]
    Provider(String),

    /// `step` was called before the first `reset`.
    #[error("step called before the first reset")]
    EpisodeNotStarted,
}
