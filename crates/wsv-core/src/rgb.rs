//! Packed RGB helpers.
//!
//! Display output is packed `0xAARRGGBB` in a `u32`, the layout expected by
//! the painting layer above this subsystem. Input values ignore the alpha
//! byte; produced values carry an opaque alpha so they can be blitted
//! directly.

/// Opaque alpha byte in packed output.
pub const ALPHA_OPAQUE: u32 = 0xFF00_0000;

/// Packs 8-bit components into opaque `0xFFRRGGBB`.
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ALPHA_OPAQUE | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Red component of a packed pixel.
#[inline]
pub const fn red(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xFF) as u8
}

/// Green component of a packed pixel.
#[inline]
pub const fn green(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xFF) as u8
}

/// Blue component of a packed pixel.
#[inline]
pub const fn blue(rgb: u32) -> u8 {
    (rgb & 0xFF) as u8
}

/// Rounds and clamps a float to the 8-bit component range.
///
/// NaN maps to 0.
#[inline]
pub fn clip_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    let v = v + 0.5;
    if v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        v as u8
    }
}

/// Complements each component of a packed pixel (255 - c), keeping alpha
/// opaque.
#[inline]
pub const fn invert_rgb(rgb: u32) -> u32 {
    pack_rgb(255 - red(rgb), 255 - green(rgb), 255 - blue(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let rgb = pack_rgb(12, 200, 255);
        assert_eq!(red(rgb), 12);
        assert_eq!(green(rgb), 200);
        assert_eq!(blue(rgb), 255);
        assert_eq!(rgb & ALPHA_OPAQUE, ALPHA_OPAQUE);
    }

    #[test]
    fn test_clip_u8() {
        assert_eq!(clip_u8(-4.0), 0);
        assert_eq!(clip_u8(0.4), 0);
        assert_eq!(clip_u8(0.6), 1);
        assert_eq!(clip_u8(254.6), 255);
        assert_eq!(clip_u8(300.0), 255);
        assert_eq!(clip_u8(f32::NAN), 0);
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert_rgb(pack_rgb(255, 0, 0)), pack_rgb(0, 255, 255));
        assert_eq!(invert_rgb(pack_rgb(10, 20, 30)), pack_rgb(245, 235, 225));
    }
}
