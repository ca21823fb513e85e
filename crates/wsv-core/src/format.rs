//! Sample formats for raw raster data.
//!
//! A whole-slide tile arrives as 8-bit or 16-bit unsigned integers
//! (brightfield, most fluorescence) or 32-bit floats (derived maps,
//! probability images). The format determines the *native range* used when
//! brightness/contrast rescaling is disabled and when deciding whether a
//! display window actually does anything.

/// Storage type of one raw sample.
///
/// # Variants
///
/// - `U8` - 8-bit unsigned [0, 255]
/// - `U16` - 16-bit unsigned [0, 65535]
/// - `F32` - 32-bit float, nominal [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleFormat {
    /// 8-bit unsigned integer.
    #[default]
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit single-precision float.
    F32,
}

impl SampleFormat {
    /// Number of bits per sample.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::F32 => 32,
        }
    }

    /// Whether this is a floating-point format.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32)
    }

    /// Maximum representable sample value, as f32.
    ///
    /// For `F32` this is the nominal top of the range (1.0), not
    /// `f32::MAX`; float rasters in this pipeline are expected to be
    /// normalized probability/density maps.
    #[inline]
    pub const fn max_value(&self) -> f32 {
        match self {
            Self::U8 => 255.0,
            Self::U16 => 65535.0,
            Self::F32 => 1.0,
        }
    }

    /// Native full display range `(min, max)` for this format.
    ///
    /// Used instead of a channel's display window when rescaling is
    /// disabled, and as the reference range for deciding whether a window
    /// is a no-op.
    #[inline]
    pub const fn native_range(&self) -> (f32, f32) {
        (0.0, self.max_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        assert_eq!(SampleFormat::U8.bits(), 8);
        assert_eq!(SampleFormat::U16.bits(), 16);
        assert_eq!(SampleFormat::F32.bits(), 32);
    }

    #[test]
    fn test_native_range() {
        assert_eq!(SampleFormat::U8.native_range(), (0.0, 255.0));
        assert_eq!(SampleFormat::U16.native_range(), (0.0, 65535.0));
        assert_eq!(SampleFormat::F32.native_range(), (0.0, 1.0));
    }

    #[test]
    fn test_is_float() {
        assert!(!SampleFormat::U8.is_float());
        assert!(!SampleFormat::U16.is_float());
        assert!(SampleFormat::F32.is_float());
    }
}
