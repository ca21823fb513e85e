//! Lookup-table colorization.
//!
//! Maps a rescaled [0, 1] value to a packed RGB contribution by scaling a
//! channel's assigned color: 0 is black, 1 is the full color. Inverted
//! modes complement the *color* before scaling, never the produced pixel,
//! so that contributions from several channels still combine additively;
//! the renderer complements the finished composite instead.
//!
//! # Example
//!
//! ```rust
//! use wsv_display::lut::{colorize, lut_color};
//! use wsv_display::DisplayMode;
//! use wsv_core::rgb::pack_rgb;
//!
//! let red = pack_rgb(255, 0, 0);
//! let color = lut_color(Some(red), DisplayMode::Color).unwrap();
//! assert_eq!(colorize(128.0 / 255.0, color), pack_rgb(128, 0, 0));
//!
//! // inverted mode looks up through the complemented color
//! let color = lut_color(Some(red), DisplayMode::InvertedColor).unwrap();
//! assert_eq!(colorize(128.0 / 255.0, color), pack_rgb(0, 128, 128));
//! ```

use crate::mode::DisplayMode;
use wsv_core::rgb::{blue, clip_u8, green, invert_rgb, pack_rgb, red};

/// White, the LUT color for grayscale modes.
pub const WHITE: u32 = pack_rgb(255, 255, 255);

/// Resolves the color a channel's LUT should use under `mode`.
///
/// Grayscale modes replace every channel color with white. `None` means
/// the channel has no assigned color (true-color pass-through); it stays
/// `None` in color modes so extracted RGB values are used directly.
#[inline]
pub fn lut_color(color: Option<u32>, mode: DisplayMode) -> Option<u32> {
    if !mode.use_color_luts() {
        return Some(WHITE);
    }
    match color {
        Some(c) if mode.invert_colors() => Some(invert_rgb(c)),
        other => other,
    }
}

/// Scales a LUT color by a rescaled value in [0, 1].
#[inline]
pub fn colorize(scaled: f32, color: u32) -> u32 {
    pack_rgb(
        clip_u8(scaled * red(color) as f32),
        clip_u8(scaled * green(color) as f32),
        clip_u8(scaled * blue(color) as f32),
    )
}

/// Packs three rescaled values directly as R, G, B (identity LUT for
/// true-color channels).
#[inline]
pub fn colorize_rgb(scaled: [f32; 3]) -> u32 {
    pack_rgb(
        clip_u8(scaled[0] * 255.0),
        clip_u8(scaled[1] * 255.0),
        clip_u8(scaled[2] * 255.0),
    )
}

/// Precomputed 256-entry LUT for one (color, mode) pair.
///
/// Whole-image paths quantize the rescaled value to 8 bits and index the
/// table instead of repeating the three multiplications per pixel.
#[derive(Debug, Clone)]
pub struct ChannelLut {
    table: Box<[u32; 256]>,
}

impl ChannelLut {
    /// Builds the LUT for an already mode-resolved color.
    pub fn new(color: u32) -> Self {
        let mut table = Box::new([0u32; 256]);
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = colorize(i as f32 / 255.0, color);
        }
        Self { table }
    }

    /// Builds the LUT a channel with `color` uses under `mode`.
    ///
    /// Returns `None` for a true-color channel in a color mode, which has
    /// no single LUT.
    pub fn for_mode(color: Option<u32>, mode: DisplayMode) -> Option<Self> {
        lut_color(color, mode).map(Self::new)
    }

    /// Looks up the packed RGB for a rescaled value in [0, 1].
    #[inline]
    pub fn entry(&self, scaled: f32) -> u32 {
        self.table[clip_u8(scaled * 255.0) as usize]
    }
}
