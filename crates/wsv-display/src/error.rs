//! Error types for the display pipeline.

use thiserror::Error;

/// Error type for channel display operations.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Additive merge requested from a channel that cannot participate in
    /// composites.
    #[error("channel '{channel}' is not additive and must be rendered standalone")]
    NonAdditive {
        /// Name of the offending channel
        channel: String,
    },

    /// Stain matrix has no inverse, so deconvolution is undefined.
    #[error("stain matrix is singular and cannot be inverted")]
    SingularStainMatrix,

    /// A whole-image render was requested with no channels.
    #[error("no channels supplied for rendering")]
    EmptyChannelList,

    /// Underlying buffer error (bounds, dimensions, sizes).
    #[error(transparent)]
    Core(#[from] wsv_core::Error),
}

/// Result type for channel display operations.
pub type DisplayResult<T> = Result<T, DisplayError>;
