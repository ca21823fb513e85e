//! Additive compositing of channel contributions.
//!
//! Colorized contributions from additive channels fold into a single
//! packed-RGB image by per-component saturating addition. Non-additive
//! channels replace the image instead and can only be rendered standalone.
//! For inverted display modes the finished composite is complemented here,
//! after all merging, so additivity is preserved throughout.
//!
//! # Example
//!
//! ```rust
//! use wsv_core::{PixelBuffer, SampleFormat, rgb::pack_rgb};
//! use wsv_display::{composite::render, ChannelDisplay, DirectChannel, DisplayMode};
//!
//! // two-band fluorescence tile
//! let buf = PixelBuffer::from_u8(1, 1, 2, vec![128, 64]).unwrap();
//! let channels: Vec<Box<dyn ChannelDisplay>> = vec![
//!     Box::new(DirectChannel::new("Red", 0, pack_rgb(255, 0, 0), SampleFormat::U8)),
//!     Box::new(DirectChannel::new("Green", 1, pack_rgb(0, 255, 0), SampleFormat::U8)),
//! ];
//!
//! let rgb = render(&buf, &channels, DisplayMode::Color).unwrap();
//! assert_eq!(rgb[0], pack_rgb(128, 64, 0));
//! ```

use crate::channel::ChannelDisplay;
use crate::error::{DisplayError, DisplayResult};
use crate::mode::DisplayMode;
use tracing::{debug, trace};
use wsv_core::rgb::{blue, green, invert_rgb, pack_rgb, red};
use wsv_core::{Error as CoreError, PixelBuffer};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Black with opaque alpha, the additive accumulator's starting value.
pub const BLACK: u32 = pack_rgb(0, 0, 0);

/// Merges two packed pixels additively.
///
/// Component-wise sum saturated at 255; no wraparound. Commutative and
/// associative up to saturation. Alpha stays opaque.
#[inline]
pub fn merge_additive(existing: u32, contribution: u32) -> u32 {
    pack_rgb(
        red(existing).saturating_add(red(contribution)),
        green(existing).saturating_add(green(contribution)),
        blue(existing).saturating_add(blue(contribution)),
    )
}

/// Merges `src` into `dst` pixel by pixel, additively.
///
/// # Errors
///
/// The buffers must hold the same number of pixels.
pub fn merge_buffers_additive(dst: &mut [u32], src: &[u32]) -> DisplayResult<()> {
    if dst.len() != src.len() {
        return Err(CoreError::buffer_size_mismatch(dst.len(), src.len()).into());
    }
    for (d, s) in dst.iter_mut().zip(src) {
        *d = merge_additive(*d, *s);
    }
    Ok(())
}

/// Validates that an RGB output slice matches a buffer's pixel count.
pub(crate) fn check_output_len(buffer: &PixelBuffer, rgb_out: &[u32]) -> DisplayResult<()> {
    if rgb_out.len() != buffer.pixel_count() {
        return Err(CoreError::buffer_size_mismatch(buffer.pixel_count(), rgb_out.len()).into());
    }
    Ok(())
}

/// Runs `f(y, row)` over each row of a packed RGB image, in parallel when
/// the `parallel` feature is enabled.
pub(crate) fn for_each_row<F>(rgb: &mut [u32], width: usize, f: F)
where
    F: Fn(usize, &mut [u32]) + Send + Sync,
{
    if width == 0 {
        return;
    }
    #[cfg(feature = "parallel")]
    rgb.par_chunks_mut(width).enumerate().for_each(|(y, row)| f(y, row));
    #[cfg(not(feature = "parallel"))]
    rgb.chunks_mut(width).enumerate().for_each(|(y, row)| f(y, row));
}

/// Renders a channel list into a freshly allocated packed RGB image.
///
/// See [`render_into`] for the compositing rules.
pub fn render(
    buffer: &PixelBuffer,
    channels: &[Box<dyn ChannelDisplay>],
    mode: DisplayMode,
) -> DisplayResult<Vec<u32>> {
    let mut rgb = vec![BLACK; buffer.pixel_count()];
    render_into(buffer, channels, &mut rgb, mode)?;
    Ok(rgb)
}

/// Renders a channel list into an existing packed RGB image, replacing its
/// contents.
///
/// A single channel renders directly, additive or not. Several channels
/// composite additively from black; every channel in the list must then be
/// additive, since a non-additive contribution cannot merge. For inverted
/// modes the finished composite is complemented at the end.
///
/// Long composites are not chunked or cancelled here; callers working on
/// large rasters should render tile by tile.
///
/// # Errors
///
/// - [`DisplayError::EmptyChannelList`] with no channels
/// - [`DisplayError::NonAdditive`] when a non-additive channel appears in
///   a multi-channel composite
/// - dimension errors when `rgb_out` doesn't match the buffer
pub fn render_into(
    buffer: &PixelBuffer,
    channels: &[Box<dyn ChannelDisplay>],
    rgb_out: &mut [u32],
    mode: DisplayMode,
) -> DisplayResult<()> {
    let Some((first, rest)) = channels.split_first() else {
        return Err(DisplayError::EmptyChannelList);
    };
    check_output_len(buffer, rgb_out)?;
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        channels = channels.len(),
        ?mode,
        "render"
    );

    if rest.is_empty() {
        first.apply_to_image(buffer, rgb_out, mode)?;
    } else {
        if let Some(ch) = channels.iter().find(|c| !c.is_additive()) {
            debug!(channel = ch.name(), "non-additive channel in composite");
            return Err(DisplayError::NonAdditive {
                channel: ch.name().to_owned(),
            });
        }
        rgb_out.fill(BLACK);
        for ch in channels {
            ch.update_image_additive(buffer, rgb_out, mode)?;
        }
    }

    if mode.invert_colors() {
        for_each_row(rgb_out, buffer.width() as usize, |_, row| {
            for px in row {
                *px = invert_rgb(*px);
            }
        });
    }
    Ok(())
}
