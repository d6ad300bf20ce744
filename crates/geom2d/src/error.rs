//! Construction errors shared by `Box2D` and `Ray2D`.
//!
//! Both kinds mean "invalid geometric input". They are not retryable: the
//! constructor that raised them produced no value.

/// Invalid geometric input rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeomError {
    /// The two corners agree on x within `EPS`.
    #[error("box has zero width")]
    ZeroWidth,
    /// The two corners agree on y within `EPS`.
    #[error("box has zero length")]
    ZeroLength,
    /// The direction vector is too short to normalize.
    #[error("direction vector has zero length")]
    DegenerateDirection,
}

pub type Result<T> = std::result::Result<T, GeomError>;
