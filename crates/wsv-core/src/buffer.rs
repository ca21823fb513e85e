//! Read-only pixel buffer abstraction.
//!
//! A [`PixelBuffer`] wraps one decoded tile or region: a band-interleaved
//! raster of raw samples plus its dimensions and [`SampleFormat`]. The
//! display pipeline reads samples as `f32` and never writes back; cached
//! tiles stay exactly as the slide reader produced them.
//!
//! # Memory Layout
//!
//! Samples are stored row-major, bands interleaved per pixel:
//!
//! ```text
//! [b0 b1 b2  b0 b1 b2  ...]  <- Row 0
//! [b0 b1 b2  b0 b1 b2  ...]  <- Row 1
//! ```
//!
//! # Usage
//!
//! ```
//! use wsv_core::{PixelBuffer, SampleFormat};
//!
//! // 2x2 RGB tile, 8-bit
//! let data = vec![
//!     255, 0, 0,   0, 255, 0,
//!     0, 0, 255,   128, 128, 128,
//! ];
//! let buf = PixelBuffer::from_u8(2, 2, 3, data).unwrap();
//!
//! assert_eq!(buf.sample(1, 1, 0).unwrap(), 128.0);
//! assert_eq!(buf.format(), SampleFormat::U8);
//! ```

use crate::error::{Error, Result};
use crate::format::SampleFormat;

/// Raw sample storage, one variant per [`SampleFormat`].
#[derive(Debug, Clone)]
enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl Samples {
    #[inline]
    fn get(&self, idx: usize) -> f32 {
        match self {
            Self::U8(v) => v[idx] as f32,
            Self::U16(v) => v[idx] as f32,
            Self::F32(v) => v[idx],
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::F32(v) => v.len(),
        }
    }

    fn format(&self) -> SampleFormat {
        match self {
            Self::U8(_) => SampleFormat::U8,
            Self::U16(_) => SampleFormat::U16,
            Self::F32(_) => SampleFormat::F32,
        }
    }
}

/// Read-only, band-interleaved raster of raw samples.
///
/// The buffer is externally owned in spirit: the display layer constructs
/// one around decoded tile data, reads from it, and hands any RGB output
/// back through separate buffers. There is no mutable sample access.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    samples: Samples,
    width: u32,
    height: u32,
    bands: u32,
}

impl PixelBuffer {
    fn new(width: u32, height: u32, bands: u32, samples: Samples) -> Result<Self> {
        if width == 0 || height == 0 || bands == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                bands,
                "width, height and bands must be > 0",
            ));
        }
        let expected = width as usize * height as usize * bands as usize;
        if samples.len() != expected {
            return Err(Error::buffer_size_mismatch(expected, samples.len()));
        }
        Ok(Self {
            samples,
            width,
            height,
            bands,
        })
    }

    /// Creates a buffer over 8-bit sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * bands`.
    pub fn from_u8(width: u32, height: u32, bands: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, bands, Samples::U8(data))
    }

    /// Creates a buffer over 16-bit sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * bands`.
    pub fn from_u16(width: u32, height: u32, bands: u32, data: Vec<u16>) -> Result<Self> {
        Self::new(width, height, bands, Samples::U16(data))
    }

    /// Creates a buffer over 32-bit float sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * bands`.
    pub fn from_f32(width: u32, height: u32, bands: u32, data: Vec<f32>) -> Result<Self> {
        Self::new(width, height, bands, Samples::F32(data))
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bands per pixel.
    #[inline]
    pub fn bands(&self) -> u32 {
        self.bands
    }

    /// Storage format of the raw samples.
    #[inline]
    pub fn format(&self) -> SampleFormat {
        self.samples.format()
    }

    /// Total pixel count (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw sample at (x, y) for one band, as f32.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] for coordinates outside the raster,
    /// [`Error::BandOutOfRange`] for a band index past the band count.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, band: u32) -> Result<f32> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        if band >= self.bands {
            return Err(Error::band_out_of_range(band, self.bands));
        }
        Ok(self.sample_unchecked(x, y, band))
    }

    /// Raw sample at (x, y) for one band, without bounds checking.
    ///
    /// Whole-image loops validate dimensions once up front and then use
    /// this fast path. Debug builds still assert the bounds.
    #[inline]
    pub fn sample_unchecked(&self, x: u32, y: u32, band: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height && band < self.bands);
        let idx = (y as usize * self.width as usize + x as usize) * self.bands as usize
            + band as usize;
        self.samples.get(idx)
    }

    /// The first three bands at (x, y) as an RGB triplet.
    ///
    /// Buffers with fewer than three bands repeat the last available band,
    /// so a single-band grayscale buffer yields `[v, v, v]`.
    #[inline]
    pub fn rgb_samples(&self, x: u32, y: u32) -> Result<[f32; 3]> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(self.rgb_samples_unchecked(x, y))
    }

    /// Unchecked variant of [`rgb_samples`](Self::rgb_samples).
    #[inline]
    pub fn rgb_samples_unchecked(&self, x: u32, y: u32) -> [f32; 3] {
        let last = self.bands - 1;
        [
            self.sample_unchecked(x, y, 0.min(last)),
            self.sample_unchecked(x, y, 1.min(last)),
            self.sample_unchecked(x, y, 2.min(last)),
        ]
    }
}
