//! Color transforms for derived channels.
//!
//! A derived channel does not read one raw band; it computes its scalar
//! from the RGB triplet of the underlying pixel. The transforms here cover
//! the brightfield cases: single-component extraction, RGB mean, optical
//! density, and stain deconvolution via a 3x3 stain matrix.
//!
//! # Optical density
//!
//! Transmitted-light values are converted to optical densities with
//! `od(v) = log10(max_value / max(v, 1))`, so a fully transparent pixel
//! (v = max) has OD 0 and darker pixels have higher OD. Deconvolution then
//! projects the OD vector onto the inverse of the stain matrix, separating
//! e.g. hematoxylin from eosin or DAB.
//!
//! # Example
//!
//! ```rust
//! use wsv_display::transform::{ColorTransform, StainVectors};
//!
//! let stains = StainVectors::h_e().unwrap();
//! let hematoxylin = ColorTransform::StainDeconvolution { stains, stain: 0 };
//!
//! // A pure white pixel carries no stain at all
//! let c = hematoxylin.apply([255.0, 255.0, 255.0], 255.0);
//! assert!(c.abs() < 1e-6);
//! ```

use crate::error::{DisplayError, DisplayResult};

/// Converts a transmitted-light value to optical density.
#[inline]
pub fn optical_density(value: f32, max_value: f32) -> f32 {
    (max_value / value.max(1.0)).log10()
}

/// Three normalized stain vectors plus the precomputed inverse of their
/// matrix.
///
/// Rows are stains, columns are R/G/B optical densities. The inverse is
/// computed once at construction; a singular matrix is rejected there so
/// per-pixel deconvolution stays infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StainVectors {
    stains: [[f32; 3]; 3],
    inverse: [[f32; 3]; 3],
}

impl StainVectors {
    /// Builds stain vectors from three RGB optical-density triplets.
    ///
    /// Each vector is normalized to unit length. Returns
    /// [`DisplayError::SingularStainMatrix`] if the matrix cannot be
    /// inverted.
    pub fn new(s0: [f32; 3], s1: [f32; 3], s2: [f32; 3]) -> DisplayResult<Self> {
        let stains = [normalize(s0), normalize(s1), normalize(s2)];
        let inverse = invert_3x3(&stains).ok_or(DisplayError::SingularStainMatrix)?;
        Ok(Self { stains, inverse })
    }

    /// Standard hematoxylin/eosin stain vectors (Ruifrok & Johnston), with
    /// the residual as the third stain.
    pub fn h_e() -> DisplayResult<Self> {
        Self::new(
            [0.65, 0.70, 0.29],
            [0.07, 0.99, 0.11],
            [0.27, 0.57, 0.78],
        )
    }

    /// Standard hematoxylin/DAB stain vectors (Ruifrok & Johnston).
    pub fn h_dab() -> DisplayResult<Self> {
        Self::new(
            [0.65, 0.70, 0.29],
            [0.27, 0.57, 0.78],
            [0.63, 0.60, 0.50],
        )
    }

    /// The normalized stain vector at `index` (0..3).
    pub fn stain(&self, index: usize) -> [f32; 3] {
        self.stains[index]
    }

    /// Deconvolves an OD triplet into the concentration of one stain.
    ///
    /// With stains as matrix rows, `od = M^T * c`, so concentrations are
    /// `c = (M^-1)^T * od`; this reads one column of the stored inverse.
    #[inline]
    pub fn deconvolve(&self, od: [f32; 3], stain: usize) -> f32 {
        let inv = &self.inverse;
        od[0] * inv[0][stain] + od[1] * inv[1][stain] + od[2] * inv[2][stain]
    }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len < 1e-12 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Inverse of a 3x3 matrix via the adjugate; `None` if singular.
fn invert_3x3(m: &[[f32; 3]; 3]) -> Option<[[f32; 3]; 3]> {
    let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
    if det.abs() < 1e-9 {
        return None;
    }
    let inv_det = 1.0 / det;
    Some([
        [
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
        ],
        [
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
        ],
        [
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
        ],
    ])
}

/// How a derived channel computes its scalar from an RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorTransform {
    /// Red component only.
    Red,
    /// Green component only.
    Green,
    /// Blue component only.
    Blue,
    /// Mean of the three components.
    RgbMean,
    /// Sum of the per-component optical densities.
    OpticalDensitySum,
    /// Concentration of one stain after color deconvolution.
    StainDeconvolution {
        /// Stain matrix (with precomputed inverse).
        stains: StainVectors,
        /// Which stain channel to return (0..3).
        stain: usize,
    },
}

impl ColorTransform {
    /// Applies the transform to raw RGB samples.
    ///
    /// `max_value` is the native maximum of the sample format (255 for
    /// 8-bit brightfield data). Side-effect-free.
    #[inline]
    pub fn apply(&self, rgb: [f32; 3], max_value: f32) -> f32 {
        match self {
            Self::Red => rgb[0],
            Self::Green => rgb[1],
            Self::Blue => rgb[2],
            Self::RgbMean => (rgb[0] + rgb[1] + rgb[2]) / 3.0,
            Self::OpticalDensitySum => {
                optical_density(rgb[0], max_value)
                    + optical_density(rgb[1], max_value)
                    + optical_density(rgb[2], max_value)
            }
            Self::StainDeconvolution { stains, stain } => {
                let od = [
                    optical_density(rgb[0], max_value),
                    optical_density(rgb[1], max_value),
                    optical_density(rgb[2], max_value),
                ];
                stains.deconvolve(od, *stain)
            }
        }
    }

    /// Suggested display window for this transform.
    ///
    /// Component transforms span the native range; optical-density outputs
    /// use fixed windows that match typical brightfield staining.
    pub fn default_range(&self, max_value: f32) -> (f32, f32) {
        match self {
            Self::Red | Self::Green | Self::Blue | Self::RgbMean => (0.0, max_value),
            Self::OpticalDensitySum => (0.0, 2.5),
            Self::StainDeconvolution { .. } => (0.0, 1.5),
        }
    }

    /// Short human-readable name, used as a default channel name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::RgbMean => "RGB mean",
            Self::OpticalDensitySum => "Optical density sum",
            Self::StainDeconvolution { stain: 0, .. } => "Stain 1",
            Self::StainDeconvolution { stain: 1, .. } => "Stain 2",
            Self::StainDeconvolution { .. } => "Stain 3",
        }
    }
}
