//! # wsv-display
//!
//! Channel display pipeline for whole-slide viewing.
//!
//! Whole-slide viewers cache raw tiles and must leave them untouched, so
//! brightness/contrast, color LUTs and channel merges are applied
//! on-the-fly while painting. This crate implements that pipeline: it
//! turns arbitrary per-pixel sample data (8/16/32-bit, single or
//! multi-band, including color-deconvolved channels) into
//! contrast-adjusted, optionally inverted, additively blended RGB output.
//!
//! Per pixel the stages are:
//!
//! ```text
//! extract -> rescale -> colorize -> composite
//! ```
//!
//! - **extract** ([`channel`], [`transform`]) reads a channel's scalar (or
//!   RGB triplet) from a [`wsv_core::PixelBuffer`], applying any color
//!   transform such as stain deconvolution
//! - **rescale** ([`rescale`], [`window`]) maps it into [0, 1] through the
//!   channel's display window
//! - **colorize** ([`lut`]) scales the channel's LUT color by the rescaled
//!   value
//! - **composite** ([`composite`]) folds the contributions of all active
//!   channels additively into the displayed pixel
//!
//! # Example
//!
//! ```rust
//! use wsv_core::{PixelBuffer, SampleFormat, rgb::pack_rgb};
//! use wsv_display::{ChannelDisplay, DirectChannel, DisplayMode, composite::render};
//!
//! // a 1x1 tile with two fluorescence bands
//! let tile = PixelBuffer::from_u8(1, 1, 2, vec![128, 64]).unwrap();
//!
//! let channels: Vec<Box<dyn ChannelDisplay>> = vec![
//!     Box::new(DirectChannel::new("CD3", 0, pack_rgb(255, 0, 0), SampleFormat::U8)),
//!     Box::new(DirectChannel::new("DAPI", 1, pack_rgb(0, 0, 255), SampleFormat::U8)),
//! ];
//!
//! let rgb = render(&tile, &channels, DisplayMode::Color).unwrap();
//! assert_eq!(rgb[0], pack_rgb(128, 0, 64));
//! ```
//!
//! # Concurrency
//!
//! Descriptors are `Send + Sync` and have no interior mutability: renders
//! read through `&`, window updates need `&mut`, and the borrow checker
//! enforces the single-writer rule. Whole-image operations parallelize
//! over rows when the default `parallel` feature is enabled.
//!
//! # Feature Flags
//!
//! - `parallel` - Row-parallel whole-image operations via rayon (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod composite;
mod error;
pub mod lut;
pub mod mode;
pub mod rescale;
pub mod settings;
pub mod transform;
pub mod window;

pub use channel::{
    ChannelDisplay, DirectChannel, ModifiableChannelDisplay, TransformChannel, TrueColorChannel,
};
pub use composite::{merge_additive, render, render_into};
pub use error::{DisplayError, DisplayResult};
pub use mode::DisplayMode;
pub use window::DisplayWindow;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use wsv_display::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{
        ChannelDisplay, DirectChannel, ModifiableChannelDisplay, TransformChannel,
        TrueColorChannel,
    };
    pub use crate::composite::{merge_additive, render, render_into};
    pub use crate::error::{DisplayError, DisplayResult};
    pub use crate::mode::DisplayMode;
    pub use crate::settings::{ChannelSettings, DisplaySettings};
    pub use crate::transform::{ColorTransform, StainVectors};
    pub use crate::window::DisplayWindow;
}
