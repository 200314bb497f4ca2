pub mod context;
pub mod coordinate;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid Context: {0}")]
    InvalidContext(String),
    #[error("cannot normalize the zero vector")]
    ZeroVector,
    #[error("cannot compute an angle with the zero vector")]
    AngleWithZeroVector,
    #[error("no unique parallel component: the basis is the zero vector")]
    NoUniqueParallelComponent,
    #[error("no unique orthogonal component: the basis is the zero vector")]
    NoUniqueOrthogonalComponent,
    #[error("only defined in two or three dimensions, got {0}")]
    UnsupportedDimension(usize),
    #[error("decimal overflow: {0} is outside the representable range")]
    Overflow(String),
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use context::Context;
pub use coordinate::IntoCoordinate;
pub use rust_decimal::Decimal;
pub use utils::{generate_random_vectors, vector_sum};
pub use vector::{AngleUnit, Vector};
