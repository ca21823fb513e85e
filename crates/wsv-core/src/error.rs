//! Error types for wsv-core operations.
//!
//! All failures in this subsystem indicate programmer error in the calling
//! layer (bad coordinates, mismatched buffers, misuse of a non-additive
//! channel). They are deterministic and never transient, so there is no
//! retry machinery; every error propagates to the caller.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during raster access and display operations.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds), [`BandOutOfRange`](Error::BandOutOfRange)
/// - **Dimension errors**: [`DimensionMismatch`](Error::DimensionMismatch), [`BufferSizeMismatch`](Error::BufferSizeMismatch)
/// - **Misuse errors**: [`Unsupported`](Error::Unsupported)
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside buffer bounds.
    ///
    /// Returned when accessing a sample at (x, y) where `x >= width` or
    /// `y >= height`. Callers are expected to pre-validate coordinates in
    /// hot loops; this error exists for the per-pixel inspection paths.
    #[error("pixel ({x}, {y}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Band index exceeds the buffer's band count.
    #[error("band {band} out of range for buffer with {bands} bands")]
    BandOutOfRange {
        /// Requested band index
        band: u32,
        /// Number of bands in the buffer
        bands: u32,
    },

    /// Buffer dimensions don't match for a whole-image operation.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First buffer width
        a_width: u32,
        /// First buffer height
        a_height: u32,
        /// Second buffer width
        b_width: u32,
        /// Second buffer height
        b_height: u32,
    },

    /// Buffer dimensions are invalid (zero width, height or band count).
    #[error("invalid dimensions: {width}x{height} with {bands} bands ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested band count
        bands: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Raw sample data length doesn't match width * height * bands.
    #[error("buffer size mismatch: expected {expected} samples, got {got}")]
    BufferSizeMismatch {
        /// Expected sample count
        expected: usize,
        /// Actual sample count
        got: usize,
    },

    /// Operation is not supported by this channel or buffer.
    ///
    /// Raised for misuse such as requesting an additive merge from a
    /// channel that claims all the color information to itself.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::BandOutOfRange`] error.
    #[inline]
    pub fn band_out_of_range(band: u32, bands: u32) -> Self {
        Self::BandOutOfRange { band, bands }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, bands: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            bands,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferSizeMismatch`] error.
    #[inline]
    pub fn buffer_size_mismatch(expected: usize, got: usize) -> Self {
        Self::BufferSizeMismatch { expected, got }
    }

    /// Creates an [`Error::Unsupported`] error.
    #[inline]
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::BandOutOfRange { .. }
        )
    }
}
