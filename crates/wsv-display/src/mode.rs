//! Display modes for channel rendering.
//!
//! A [`DisplayMode`] parametrizes one render call; it is never stored on a
//! channel descriptor. "Inverted" refers to the background: switching from
//! black-is-zero to white-is-zero. Because channels combine additively,
//! inversion is split in two: the LUT *color* is complemented before
//! scaling, and the final composited image is complemented once by the
//! renderer. Inverting only the finished pixel would break additivity.

/// How channels are visualized in one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Color LUTs on a black background.
    #[default]
    Color,
    /// Color LUTs with a white background (LUT colors complemented, final
    /// image complemented by the renderer).
    InvertedColor,
    /// White LUT for every channel, black background.
    Grayscale,
    /// White LUT for every channel, white background.
    InvertedGrayscale,
}

impl DisplayMode {
    /// Whether the final composited image should be complemented.
    #[inline]
    pub const fn invert_colors(&self) -> bool {
        matches!(self, Self::InvertedColor | Self::InvertedGrayscale)
    }

    /// Whether channel colors are used for LUTs.
    ///
    /// Grayscale modes substitute white for every channel color.
    #[inline]
    pub const fn use_color_luts(&self) -> bool {
        matches!(self, Self::Color | Self::InvertedColor)
    }
}
