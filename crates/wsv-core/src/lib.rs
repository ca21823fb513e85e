//! # wsv-core
//!
//! Core raster types for whole-slide channel display.
//!
//! This crate provides the foundational types used by the wsv-rs display
//! pipeline:
//!
//! - [`SampleFormat`] - Bit depth and native range of raw sample data
//! - [`PixelBuffer`] - Read-only, band-interleaved raster of raw samples
//! - [`rgb`] - Packed `0xAARRGGBB` helpers for display output
//! - [`Error`] - Unified error type for buffer and display operations
//!
//! ## Design Philosophy
//!
//! Raw tiles arriving from a slide reader are cached and must never be
//! mutated by the display layer. A [`PixelBuffer`] therefore exposes
//! read-only sample access as `f32` regardless of storage type; all
//! contrast, LUT and compositing work happens downstream on packed RGB
//! output buffers owned by the caller.
//!
//! ## Crate Structure
//!
//! `wsv-core` has no internal dependencies. The display pipeline crate
//! depends on it:
//!
//! ```text
//! wsv-core (this crate)
//!    ^
//!    |
//!    +-- wsv-display (channel descriptors, rescaling, LUTs, compositing)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod format;
pub mod rgb;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use format::SampleFormat;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use wsv_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::format::SampleFormat;
    pub use crate::rgb::{blue, clip_u8, green, invert_rgb, pack_rgb, red};
}
