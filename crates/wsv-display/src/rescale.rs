//! Brightness/contrast rescaling.
//!
//! Maps an extracted sample value into [0, 1] through a display window:
//! values at or below the window minimum map to 0, values at or above the
//! maximum map to 1, linear in between.
//!
//! # Example
//!
//! ```rust
//! use wsv_display::rescale::rescale;
//!
//! assert_eq!(rescale(128.0, 0.0, 255.0), 128.0 / 255.0);
//! assert_eq!(rescale(-10.0, 0.0, 255.0), 0.0);
//! assert_eq!(rescale(300.0, 0.0, 255.0), 1.0);
//! ```

/// Rescales `value` into [0, 1] through the window `[min, max]`.
///
/// A zero-width window (`min == max`) is a defined numeric edge case, not
/// an error: values below the window map to 0, everything else to 1.
/// The same rule covers an inverted window (`max < min`). NaN maps to 0.
#[inline]
pub fn rescale(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    if max <= min {
        return if value < min { 0.0 } else { 1.0 };
    }
    if value <= min {
        0.0
    } else if value >= max {
        1.0
    } else {
        (value - min) / (max - min)
    }
}
