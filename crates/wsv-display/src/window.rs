//! Display windows: the mutable brightness/contrast state of a channel.

use wsv_core::SampleFormat;

/// The `[min_display, max_display]` contrast window of one channel, plus
/// the `[min_allowed, max_allowed]` hint bounds that sliders should respect.
///
/// The intended operating range is
/// `min_allowed <= min_display <= max_display <= max_allowed`, but the
/// allowed bounds are only a hint. Setters clamp into range; windows built
/// directly from fields are taken as-is and must never crash the rescaler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayWindow {
    /// Current window minimum (maps to 0).
    pub min_display: f32,
    /// Current window maximum (maps to 1).
    pub max_display: f32,
    /// Suggested lower bound for the window.
    pub min_allowed: f32,
    /// Suggested upper bound for the window.
    pub max_allowed: f32,
}

impl DisplayWindow {
    /// Creates a window opened to the full allowed range.
    pub fn full(min_allowed: f32, max_allowed: f32) -> Self {
        Self {
            min_display: min_allowed,
            max_display: max_allowed,
            min_allowed,
            max_allowed,
        }
    }

    /// Creates a window opened to the native range of a sample format.
    pub fn native(format: SampleFormat) -> Self {
        let (min, max) = format.native_range();
        Self::full(min, max)
    }

    /// Sets the window minimum, clamped into `[min_allowed, max_display]`.
    pub fn set_min_display(&mut self, min_display: f32) {
        self.min_display = min_display.max(self.min_allowed).min(self.max_display);
    }

    /// Sets the window maximum, clamped into `[min_display, max_allowed]`.
    pub fn set_max_display(&mut self, max_display: f32) {
        self.max_display = max_display.min(self.max_allowed).max(self.min_display);
    }

    /// Replaces the allowed bounds and re-clamps the current window into
    /// them.
    ///
    /// For a 16-bit image where fewer bits are actually used, or a float
    /// image with an unbounded nominal range, this restricts
    /// brightness/contrast sliders to something sensible.
    pub fn set_min_max_allowed(&mut self, min_allowed: f32, max_allowed: f32) {
        self.min_allowed = min_allowed;
        self.max_allowed = max_allowed;
        self.min_display = self.min_display.clamp(min_allowed, max_allowed);
        self.max_display = self.max_display.clamp(min_allowed, max_allowed);
        if self.min_display > self.max_display {
            self.min_display = self.max_display;
        }
    }

    /// Whether this window equals the native full range of `format`.
    ///
    /// A channel whose window covers the native range applies no contrast
    /// adjustment at all.
    #[inline]
    pub fn covers_native_range(&self, format: SampleFormat) -> bool {
        let (min, max) = format.native_range();
        self.min_display == min && self.max_display == max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_and_native() {
        let w = DisplayWindow::native(SampleFormat::U8);
        assert_eq!(w.min_display, 0.0);
        assert_eq!(w.max_display, 255.0);
        assert!(w.covers_native_range(SampleFormat::U8));
        assert!(!w.covers_native_range(SampleFormat::U16));
    }

    #[test]
    fn test_set_min_display_clamps() {
        let mut w = DisplayWindow::native(SampleFormat::U8);
        w.set_min_display(-50.0);
        assert_eq!(w.min_display, 0.0);
        w.set_max_display(200.0);
        w.set_min_display(220.0);
        // cannot pass the current maximum
        assert_eq!(w.min_display, 200.0);
    }

    #[test]
    fn test_set_max_display_clamps() {
        let mut w = DisplayWindow::native(SampleFormat::U8);
        w.set_max_display(400.0);
        assert_eq!(w.max_display, 255.0);
        w.set_min_display(100.0);
        w.set_max_display(50.0);
        assert_eq!(w.max_display, 100.0);
    }

    #[test]
    fn test_set_min_max_allowed_reclamps() {
        let mut w = DisplayWindow::native(SampleFormat::U16);
        w.set_min_display(10000.0);
        w.set_max_display(40000.0);
        // the image only uses 12 bits
        w.set_min_max_allowed(0.0, 4095.0);
        assert_eq!(w.max_display, 4095.0);
        assert_eq!(w.min_display, 4095.0);
        assert!(w.min_display <= w.max_display);
    }
}
