//! Error types for fp16gemm

use thiserror::Error;

/// Result type alias using fp16gemm's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations detected by packing and compute.
///
/// Values that overflow half precision are not errors; they pack as
/// infinity and propagate through the multiply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dimension was zero
    #[error("Invalid dimension {dim}={value}: must be positive")]
    InvalidDimension {
        /// Dimension name (`m`, `n` or `k`)
        dim: &'static str,
        /// Supplied value
        value: usize,
    },

    /// Compute-time shape disagrees with the packed matrix
    #[error("Shape mismatch on {dim}: packed matrix has {expected}, got {got}")]
    ShapeMismatch {
        /// Dimension name (`n` or `k`)
        dim: &'static str,
        /// Value stored in the packed matrix
        expected: usize,
        /// Value supplied by the caller
        got: usize,
    },

    /// Leading dimension is shorter than a stored row
    #[error("Leading dimension of {matrix} is {ld}, must be at least {min}")]
    LeadingDimension {
        /// Matrix name (`A`, `B` or `C`)
        matrix: &'static str,
        /// Supplied leading dimension
        ld: usize,
        /// Smallest valid leading dimension
        min: usize,
    },

    /// Buffer cannot hold the described matrix
    #[error("Buffer for {matrix} has {len} elements, needs at least {required}")]
    BufferTooSmall {
        /// Matrix name (`A`, `B` or `C`)
        matrix: &'static str,
        /// Slice length
        len: usize,
        /// Elements required by shape and leading dimension
        required: usize,
    },

    /// Shape and leading dimension describe more elements than fit in `usize`
    #[error("Size of {matrix} overflows: {rows} rows with leading dimension {ld}")]
    SizeOverflow {
        /// Matrix name (`A`, `B` or `C`)
        matrix: &'static str,
        /// Stored rows
        rows: usize,
        /// Supplied leading dimension
        ld: usize,
    },

    /// Block size is zero, wider than the microkernel tile, or too large to
    /// allocate
    #[error("Invalid block size {rows}x{cols}")]
    InvalidBlockSize {
        /// Rows per block (k direction)
        rows: usize,
        /// Columns per block (n direction)
        cols: usize,
    },
}
