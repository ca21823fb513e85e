//! Channel descriptors.
//!
//! A channel is one value per pixel: either a raw band of the image or a
//! derived value computed from several bands (color deconvolution, optical
//! density). A descriptor couples that definition with its display state
//! (the contrast window, LUT color and additivity) and drives the
//! per-pixel pipeline: extract, rescale, colorize.
//!
//! Descriptors are created once when an image's channel set is
//! characterized and live for the viewing session. Each is owned by the
//! display state of exactly one image; changing a window takes `&mut`, so
//! the borrow checker enforces the single-writer contract while renders
//! read through `&`.
//!
//! # Modifiability
//!
//! Whether a window may change is part of the type, not a runtime flag:
//! [`ModifiableChannelDisplay`] is a second trait implemented only by
//! descriptors with adjustable windows. Derived channels with fixed
//! windows ([`TransformChannel`]) simply do not implement it, so mutation
//! cannot be expressed, let alone fail.
//!
//! # Example
//!
//! ```rust
//! use wsv_core::{PixelBuffer, SampleFormat, rgb::pack_rgb};
//! use wsv_display::{ChannelDisplay, DirectChannel, DisplayMode};
//!
//! let buf = PixelBuffer::from_u8(1, 1, 1, vec![128]).unwrap();
//! let dapi = DirectChannel::new("DAPI", 0, pack_rgb(0, 0, 255), SampleFormat::U8);
//!
//! let rgb = dapi.pixel_rgb(&buf, 0, 0, DisplayMode::Color).unwrap();
//! assert_eq!(rgb, pack_rgb(0, 0, 128));
//! ```

use crate::composite::{check_output_len, for_each_row, merge_additive};
use crate::error::{DisplayError, DisplayResult};
use crate::lut::{colorize, colorize_rgb, lut_color, ChannelLut, WHITE};
use crate::mode::DisplayMode;
use crate::rescale::rescale;
use crate::transform::ColorTransform;
use crate::window::DisplayWindow;
use wsv_core::{PixelBuffer, SampleFormat};

/// Formats a scalar sample for on-hover inspection.
fn format_value(value: f32, format: SampleFormat) -> String {
    if format.is_float() {
        format!("{value:.2}")
    } else {
        format!("{value:.0}")
    }
}

/// Display contract for one channel.
///
/// Implementations are held as `Box<dyn ChannelDisplay>` by the display
/// state that owns an image's channel list and consumed by
/// [`render`](crate::composite::render). All methods are side-effect-free;
/// the trait has no mutators (see [`ModifiableChannelDisplay`]).
pub trait ChannelDisplay: Send + Sync {
    /// Channel name, e.g. `"DAPI"` or `"Hematoxylin"`.
    fn name(&self) -> &str;

    /// LUT color for this channel, or `None` for a true-color channel
    /// that keeps its extracted RGB values.
    fn color(&self) -> Option<u32>;

    /// The color transform computing this channel, if it is derived.
    fn method(&self) -> Option<&ColorTransform> {
        None
    }

    /// Sample format of the image this channel belongs to.
    fn format(&self) -> SampleFormat;

    /// Whether this channel's colorized output may be summed with other
    /// channels. Non-additive channels must be rendered standalone.
    fn is_additive(&self) -> bool;

    /// Whether the display window is applied. When false the native range
    /// of the sample format is used instead.
    fn is_rescaled(&self) -> bool;

    /// Current display window and allowed bounds.
    fn window(&self) -> &DisplayWindow;

    /// Window minimum (maps to black).
    fn min_display(&self) -> f32 {
        self.window().min_display
    }

    /// Window maximum (maps to full intensity).
    fn max_display(&self) -> f32 {
        self.window().max_display
    }

    /// Suggested lower bound for the window. Only a hint.
    fn min_allowed(&self) -> f32 {
        self.window().min_allowed
    }

    /// Suggested upper bound for the window. Only a hint.
    fn max_allowed(&self) -> f32 {
        self.window().max_allowed
    }

    /// The range actually used for rescaling: the display window, or the
    /// native range when rescaling is disabled.
    fn effective_range(&self) -> (f32, f32) {
        if self.is_rescaled() {
            (self.window().min_display, self.window().max_display)
        } else {
            self.format().native_range()
        }
    }

    /// Extracts this channel's scalar value at (x, y).
    ///
    /// Derived channels apply their transform here. True-color channels
    /// return the mean of their components; use
    /// [`extract_rgb`](Self::extract_rgb) for the triplet.
    fn extract(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<f32>;

    /// Unchecked variant of [`extract`](Self::extract) for inner loops.
    /// Callers must have validated coordinates against the buffer.
    fn extract_unchecked(&self, buffer: &PixelBuffer, x: u32, y: u32) -> f32;

    /// Extracts this channel's value as an RGB triplet.
    ///
    /// Scalar channels replicate their value across all three components.
    fn extract_rgb(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<[f32; 3]> {
        let v = self.extract(buffer, x, y)?;
        Ok([v, v, v])
    }

    /// Human-readable value at (x, y): one number for scalar channels,
    /// `"r, g, b"` for true-color channels.
    fn value_string(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<String> {
        let v = self.extract(buffer, x, y)?;
        Ok(format_value(v, self.format()))
    }

    /// Packed RGB this channel would display at (x, y) under `mode`.
    fn pixel_rgb(
        &self,
        buffer: &PixelBuffer,
        x: u32,
        y: u32,
        mode: DisplayMode,
    ) -> DisplayResult<u32> {
        let value = self.extract(buffer, x, y)?;
        let (min, max) = self.effective_range();
        let scaled = rescale(value, min, max);
        let color = lut_color(self.color(), mode).unwrap_or(WHITE);
        Ok(colorize(scaled, color))
    }

    /// Writes this channel's display RGB for every pixel into `rgb_out`,
    /// replacing its contents.
    ///
    /// # Errors
    ///
    /// The output must hold exactly `width * height` pixels.
    fn apply_to_image(
        &self,
        buffer: &PixelBuffer,
        rgb_out: &mut [u32],
        mode: DisplayMode,
    ) -> DisplayResult<()> {
        check_output_len(buffer, rgb_out)?;
        let (min, max) = self.effective_range();
        let lut = ChannelLut::for_mode(self.color(), mode).unwrap_or_else(|| ChannelLut::new(WHITE));
        for_each_row(rgb_out, buffer.width() as usize, |y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                let v = self.extract_unchecked(buffer, x as u32, y as u32);
                *px = lut.entry(rescale(v, min, max));
            }
        });
        Ok(())
    }

    /// Merges this channel's contribution at (x, y) into an existing
    /// packed pixel, additively with per-component saturation.
    ///
    /// # Errors
    ///
    /// [`DisplayError::NonAdditive`] if [`is_additive`](Self::is_additive)
    /// is false, regardless of the input values.
    fn update_rgb_additive(
        &self,
        buffer: &PixelBuffer,
        x: u32,
        y: u32,
        rgb: u32,
        mode: DisplayMode,
    ) -> DisplayResult<u32> {
        if !self.is_additive() {
            return Err(DisplayError::NonAdditive {
                channel: self.name().to_owned(),
            });
        }
        let contribution = self.pixel_rgb(buffer, x, y, mode)?;
        Ok(merge_additive(rgb, contribution))
    }

    /// Whole-image variant of [`update_rgb_additive`](Self::update_rgb_additive):
    /// merges this channel into every pixel of `rgb_out`.
    fn update_image_additive(
        &self,
        buffer: &PixelBuffer,
        rgb_out: &mut [u32],
        mode: DisplayMode,
    ) -> DisplayResult<()> {
        if !self.is_additive() {
            return Err(DisplayError::NonAdditive {
                channel: self.name().to_owned(),
            });
        }
        check_output_len(buffer, rgb_out)?;
        let (min, max) = self.effective_range();
        let lut = ChannelLut::for_mode(self.color(), mode).unwrap_or_else(|| ChannelLut::new(WHITE));
        for_each_row(rgb_out, buffer.width() as usize, |y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                let v = self.extract_unchecked(buffer, x as u32, y as u32);
                *px = merge_additive(*px, lut.entry(rescale(v, min, max)));
            }
        });
        Ok(())
    }

    /// Whether this channel changes pixels at all.
    ///
    /// False exactly when the display window equals the native full range
    /// and no color or transform is applied. Pure; the renderer uses it to
    /// take cheap pass-through paths.
    fn does_something(&self) -> bool {
        (self.is_rescaled() && !self.window().covers_native_range(self.format()))
            || self.color().is_some()
            || self.method().is_some()
    }
}

/// Mutation capability for descriptors whose window may change.
///
/// Implemented only by [`DirectChannel`] and [`TrueColorChannel`]; fixed
/// derived channels expose no mutators at the type level.
///
/// Display-range updates should normally go through the display
/// coordinator that owns the channel list, so change events reach any
/// attached views; mutating a descriptor directly is permitted but the
/// caller must serialize it against in-flight renders of that channel.
pub trait ModifiableChannelDisplay: ChannelDisplay {
    /// Sets the window minimum (clamped into the allowed bounds).
    fn set_min_display(&mut self, min_display: f32);

    /// Sets the window maximum (clamped into the allowed bounds).
    fn set_max_display(&mut self, max_display: f32);

    /// Restricts the permissible window range, re-clamping the current
    /// window. For an 8-bit image this should be 0 and 255; for 16-bit or
    /// float images a tighter range usually makes better sliders.
    fn set_min_max_allowed(&mut self, min_allowed: f32, max_allowed: f32);
}

// ============================================================================
// Direct channel: one raw band with a LUT color
// ============================================================================

/// A single raw band displayed through an assigned LUT color.
///
/// The standard descriptor for fluorescence channels: additive, with an
/// adjustable contrast window.
#[derive(Debug, Clone)]
pub struct DirectChannel {
    name: String,
    band: u32,
    color: u32,
    window: DisplayWindow,
    format: SampleFormat,
    rescale_enabled: bool,
}

impl DirectChannel {
    /// Creates a channel for `band` with the window opened to the native
    /// range of `format`.
    pub fn new(name: impl Into<String>, band: u32, color: u32, format: SampleFormat) -> Self {
        Self {
            name: name.into(),
            band,
            color,
            window: DisplayWindow::native(format),
            format,
            rescale_enabled: true,
        }
    }

    /// Replaces the display window.
    pub fn with_window(mut self, window: DisplayWindow) -> Self {
        self.window = window;
        self
    }

    /// Enables or disables brightness/contrast rescaling.
    pub fn with_rescale(mut self, enabled: bool) -> Self {
        self.rescale_enabled = enabled;
        self
    }

    /// The raw band this channel reads.
    pub fn band(&self) -> u32 {
        self.band
    }
}

impl ChannelDisplay for DirectChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Option<u32> {
        Some(self.color)
    }

    fn format(&self) -> SampleFormat {
        self.format
    }

    fn is_additive(&self) -> bool {
        true
    }

    fn is_rescaled(&self) -> bool {
        self.rescale_enabled
    }

    fn window(&self) -> &DisplayWindow {
        &self.window
    }

    fn extract(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<f32> {
        Ok(buffer.sample(x, y, self.band)?)
    }

    fn extract_unchecked(&self, buffer: &PixelBuffer, x: u32, y: u32) -> f32 {
        buffer.sample_unchecked(x, y, self.band)
    }
}

impl ModifiableChannelDisplay for DirectChannel {
    fn set_min_display(&mut self, min_display: f32) {
        self.window.set_min_display(min_display);
    }

    fn set_max_display(&mut self, max_display: f32) {
        self.window.set_max_display(max_display);
    }

    fn set_min_max_allowed(&mut self, min_allowed: f32, max_allowed: f32) {
        self.window.set_min_max_allowed(min_allowed, max_allowed);
    }
}

// ============================================================================
// True-color channel: RGB as one channel
// ============================================================================

/// An RGB image displayed as a single true-color channel.
///
/// Has no assigned LUT color: the three rescaled components pass straight
/// through as R, G, B. Wants all the color information to itself, so it is
/// never additive.
#[derive(Debug, Clone)]
pub struct TrueColorChannel {
    name: String,
    window: DisplayWindow,
    format: SampleFormat,
    rescale_enabled: bool,
}

impl TrueColorChannel {
    /// Creates a true-color channel with the window opened to the native
    /// range of `format`.
    pub fn new(name: impl Into<String>, format: SampleFormat) -> Self {
        Self {
            name: name.into(),
            window: DisplayWindow::native(format),
            format,
            rescale_enabled: true,
        }
    }

    /// Replaces the display window.
    pub fn with_window(mut self, window: DisplayWindow) -> Self {
        self.window = window;
        self
    }

    /// Enables or disables brightness/contrast rescaling.
    pub fn with_rescale(mut self, enabled: bool) -> Self {
        self.rescale_enabled = enabled;
        self
    }

    #[inline]
    fn scaled_rgb(&self, raw: [f32; 3]) -> [f32; 3] {
        let (min, max) = self.effective_range();
        [
            rescale(raw[0], min, max),
            rescale(raw[1], min, max),
            rescale(raw[2], min, max),
        ]
    }

    #[inline]
    fn display_rgb(&self, raw: [f32; 3], mode: DisplayMode) -> u32 {
        let scaled = self.scaled_rgb(raw);
        if mode.use_color_luts() {
            colorize_rgb(scaled)
        } else {
            colorize((scaled[0] + scaled[1] + scaled[2]) / 3.0, WHITE)
        }
    }
}

impl ChannelDisplay for TrueColorChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Option<u32> {
        None
    }

    fn format(&self) -> SampleFormat {
        self.format
    }

    fn is_additive(&self) -> bool {
        false
    }

    fn is_rescaled(&self) -> bool {
        self.rescale_enabled
    }

    fn window(&self) -> &DisplayWindow {
        &self.window
    }

    fn extract(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<f32> {
        let rgb = buffer.rgb_samples(x, y)?;
        Ok((rgb[0] + rgb[1] + rgb[2]) / 3.0)
    }

    fn extract_unchecked(&self, buffer: &PixelBuffer, x: u32, y: u32) -> f32 {
        let rgb = buffer.rgb_samples_unchecked(x, y);
        (rgb[0] + rgb[1] + rgb[2]) / 3.0
    }

    fn extract_rgb(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<[f32; 3]> {
        Ok(buffer.rgb_samples(x, y)?)
    }

    fn value_string(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<String> {
        let rgb = buffer.rgb_samples(x, y)?;
        Ok(format!(
            "{}, {}, {}",
            format_value(rgb[0], self.format),
            format_value(rgb[1], self.format),
            format_value(rgb[2], self.format)
        ))
    }

    fn pixel_rgb(
        &self,
        buffer: &PixelBuffer,
        x: u32,
        y: u32,
        mode: DisplayMode,
    ) -> DisplayResult<u32> {
        let raw = buffer.rgb_samples(x, y)?;
        Ok(self.display_rgb(raw, mode))
    }

    fn apply_to_image(
        &self,
        buffer: &PixelBuffer,
        rgb_out: &mut [u32],
        mode: DisplayMode,
    ) -> DisplayResult<()> {
        check_output_len(buffer, rgb_out)?;
        // pass-through when no window is applied to an 8-bit image
        let passthrough = mode.use_color_luts()
            && !self.does_something()
            && self.format == SampleFormat::U8;
        for_each_row(rgb_out, buffer.width() as usize, |y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                let raw = buffer.rgb_samples_unchecked(x as u32, y as u32);
                *px = if passthrough {
                    colorize_rgb([raw[0] / 255.0, raw[1] / 255.0, raw[2] / 255.0])
                } else {
                    self.display_rgb(raw, mode)
                };
            }
        });
        Ok(())
    }
}

impl ModifiableChannelDisplay for TrueColorChannel {
    fn set_min_display(&mut self, min_display: f32) {
        self.window.set_min_display(min_display);
    }

    fn set_max_display(&mut self, max_display: f32) {
        self.window.set_max_display(max_display);
    }

    fn set_min_max_allowed(&mut self, min_allowed: f32, max_allowed: f32) {
        self.window.set_min_max_allowed(min_allowed, max_allowed);
    }
}

// ============================================================================
// Transform channel: derived value with a fixed window
// ============================================================================

/// A derived channel computed by a [`ColorTransform`], with a display
/// window fixed at construction.
///
/// Additive exactly when it carries an assigned color; a colorless derived
/// channel renders standalone through a white LUT. Does not implement
/// [`ModifiableChannelDisplay`].
#[derive(Debug, Clone)]
pub struct TransformChannel {
    name: String,
    transform: ColorTransform,
    color: Option<u32>,
    window: DisplayWindow,
    format: SampleFormat,
}

impl TransformChannel {
    /// Creates a derived channel with the transform's suggested window.
    pub fn new(
        name: impl Into<String>,
        transform: ColorTransform,
        color: Option<u32>,
        format: SampleFormat,
    ) -> Self {
        let (min, max) = transform.default_range(format.max_value());
        Self {
            name: name.into(),
            transform,
            color,
            window: DisplayWindow::full(min, max),
            format,
        }
    }

    /// Fixes a different display window at construction.
    pub fn with_window(mut self, window: DisplayWindow) -> Self {
        self.window = window;
        self
    }
}

impl ChannelDisplay for TransformChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Option<u32> {
        self.color
    }

    fn method(&self) -> Option<&ColorTransform> {
        Some(&self.transform)
    }

    fn format(&self) -> SampleFormat {
        self.format
    }

    fn is_additive(&self) -> bool {
        self.color.is_some()
    }

    fn is_rescaled(&self) -> bool {
        true
    }

    fn window(&self) -> &DisplayWindow {
        &self.window
    }

    fn extract(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<f32> {
        let rgb = buffer.rgb_samples(x, y)?;
        Ok(self.transform.apply(rgb, self.format.max_value()))
    }

    fn extract_unchecked(&self, buffer: &PixelBuffer, x: u32, y: u32) -> f32 {
        let rgb = buffer.rgb_samples_unchecked(x, y);
        self.transform.apply(rgb, self.format.max_value())
    }

    fn value_string(&self, buffer: &PixelBuffer, x: u32, y: u32) -> DisplayResult<String> {
        // derived values are continuous even on integer images
        let v = self.extract(buffer, x, y)?;
        Ok(format!("{v:.2}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsv_core::rgb::pack_rgb;

    fn gray_ramp() -> PixelBuffer {
        PixelBuffer::from_u8(4, 1, 1, vec![0, 64, 128, 255]).unwrap()
    }

    fn rgb_1x1(r: u8, g: u8, b: u8) -> PixelBuffer {
        PixelBuffer::from_u8(1, 1, 3, vec![r, g, b]).unwrap()
    }

    #[test]
    fn test_direct_channel_red_lut() {
        // pure red LUT, full window, sample 128
        let buf = gray_ramp();
        let ch = DirectChannel::new("Ch1", 0, pack_rgb(255, 0, 0), SampleFormat::U8);
        let rgb = ch.pixel_rgb(&buf, 2, 0, DisplayMode::Color).unwrap();
        assert_eq!(rgb, pack_rgb(128, 0, 0));
    }

    #[test]
    fn test_direct_channel_inverted_mode() {
        // inverted mode looks up through cyan, the complement of red
        let buf = gray_ramp();
        let ch = DirectChannel::new("Ch1", 0, pack_rgb(255, 0, 0), SampleFormat::U8);
        let rgb = ch.pixel_rgb(&buf, 2, 0, DisplayMode::InvertedColor).unwrap();
        assert_eq!(rgb, pack_rgb(0, 128, 128));
    }

    #[test]
    fn test_direct_channel_window() {
        let buf = gray_ramp();
        let mut ch = DirectChannel::new("Ch1", 0, pack_rgb(0, 255, 0), SampleFormat::U8);
        ch.set_min_display(64.0);
        ch.set_max_display(128.0);
        assert_eq!(
            ch.pixel_rgb(&buf, 1, 0, DisplayMode::Color).unwrap(),
            pack_rgb(0, 0, 0)
        );
        assert_eq!(
            ch.pixel_rgb(&buf, 3, 0, DisplayMode::Color).unwrap(),
            pack_rgb(0, 255, 0)
        );
    }

    #[test]
    fn test_direct_channel_always_does_something() {
        let ch = DirectChannel::new("Ch1", 0, pack_rgb(255, 0, 0), SampleFormat::U8);
        assert!(ch.does_something());
    }

    #[test]
    fn test_true_color_round_trip() {
        // full-range window, normal mode: extracted RGB reproduced exactly
        let buf = rgb_1x1(37, 141, 250);
        let ch = TrueColorChannel::new("Original", SampleFormat::U8);
        let rgb = ch.pixel_rgb(&buf, 0, 0, DisplayMode::Color).unwrap();
        assert_eq!(rgb, pack_rgb(37, 141, 250));
    }

    #[test]
    fn test_true_color_does_something() {
        let mut ch = TrueColorChannel::new("Original", SampleFormat::U8);
        assert!(!ch.does_something());
        ch.set_max_display(200.0);
        assert!(ch.does_something());
        let ch = TrueColorChannel::new("Original", SampleFormat::U8).with_rescale(false);
        assert!(!ch.does_something());
    }

    #[test]
    fn test_true_color_not_additive() {
        let buf = rgb_1x1(10, 20, 30);
        let ch = TrueColorChannel::new("Original", SampleFormat::U8);
        assert!(!ch.is_additive());
        let err = ch
            .update_rgb_additive(&buf, 0, 0, 0, DisplayMode::Color)
            .unwrap_err();
        assert!(matches!(err, DisplayError::NonAdditive { .. }));
    }

    #[test]
    fn test_true_color_value_string() {
        let buf = rgb_1x1(10, 20, 30);
        let ch = TrueColorChannel::new("Original", SampleFormat::U8);
        assert_eq!(ch.value_string(&buf, 0, 0).unwrap(), "10, 20, 30");
    }

    #[test]
    fn test_scalar_value_string() {
        let buf = gray_ramp();
        let ch = DirectChannel::new("Ch1", 0, pack_rgb(255, 0, 0), SampleFormat::U8);
        assert_eq!(ch.value_string(&buf, 1, 0).unwrap(), "64");

        let fbuf = PixelBuffer::from_f32(1, 1, 1, vec![0.256]).unwrap();
        let fch = DirectChannel::new("P", 0, pack_rgb(255, 0, 0), SampleFormat::F32);
        assert_eq!(fch.value_string(&fbuf, 0, 0).unwrap(), "0.26");
    }

    #[test]
    fn test_extract_out_of_bounds() {
        let buf = gray_ramp();
        let ch = DirectChannel::new("Ch1", 0, pack_rgb(255, 0, 0), SampleFormat::U8);
        assert!(ch.extract(&buf, 4, 0).is_err());
        assert!(ch.extract(&buf, 0, 1).is_err());
    }

    #[test]
    fn test_transform_channel_is_fixed_and_derived() {
        let ch = TransformChannel::new(
            "OD sum",
            ColorTransform::OpticalDensitySum,
            None,
            SampleFormat::U8,
        );
        assert!(ch.method().is_some());
        assert!(ch.does_something());
        assert!(!ch.is_additive());
        assert_eq!(ch.max_display(), 2.5);
    }

    #[test]
    fn test_transform_channel_extract() {
        let buf = rgb_1x1(255, 255, 255);
        let ch = TransformChannel::new(
            "OD sum",
            ColorTransform::OpticalDensitySum,
            None,
            SampleFormat::U8,
        );
        assert!(ch.extract(&buf, 0, 0).unwrap().abs() < 1e-6);
        assert_eq!(ch.value_string(&buf, 0, 0).unwrap(), "0.00");
    }

    #[test]
    fn test_apply_to_image_matches_pixel_path() {
        let buf = gray_ramp();
        let ch = DirectChannel::new("Ch1", 0, pack_rgb(255, 0, 255), SampleFormat::U8);
        let mut out = vec![0u32; 4];
        ch.apply_to_image(&buf, &mut out, DisplayMode::Color).unwrap();
        for x in 0..4 {
            assert_eq!(
                out[x as usize],
                ch.pixel_rgb(&buf, x, 0, DisplayMode::Color).unwrap()
            );
        }
    }

    #[test]
    fn test_apply_to_image_wrong_size() {
        let buf = gray_ramp();
        let ch = DirectChannel::new("Ch1", 0, pack_rgb(255, 0, 0), SampleFormat::U8);
        let mut out = vec![0u32; 3];
        assert!(ch.apply_to_image(&buf, &mut out, DisplayMode::Color).is_err());
    }
}
