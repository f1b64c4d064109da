use core::slice::{ChunksExact, ChunksExactMut};

use rgb::RGB8;

use crate::error::PnmError;
use crate::info::NetpbmFormat;
use crate::pixel::{Pixel, PixelKind};

/// An in-memory Netpbm image: dimensions, format tag, max value and
/// row-major pixels.
///
/// Every row holds exactly `width` pixels and both dimensions are non-zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster<P> {
    width: u32,
    height: u32,
    maxval: u8,
    format: NetpbmFormat,
    pixels: Vec<P>,
}

/// Bitmap buffer (P1/P4). `true` is ink.
pub type Bitmap = Raster<bool>;
/// Grayscale buffer (P2/P5).
pub type Graymap = Raster<u8>;
/// Color buffer (P3/P6).
pub type Pixmap = Raster<RGB8>;

pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, PnmError> {
    if width == 0 || height == 0 {
        return Err(PnmError::InvalidDimensions(format!(
            "{width}x{height} has a zero dimension"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(PnmError::DimensionsTooLarge { width, height })
}

impl<P: Pixel> Raster<P> {
    /// A blank buffer filled with the default pixel, tagged with the ASCII
    /// format of its kind.
    pub fn new(width: u32, height: u32) -> Result<Self, PnmError> {
        let count = pixel_count(width, height)?;
        Ok(Self::from_parts(
            width,
            height,
            P::DEFAULT_MAXVAL,
            NetpbmFormat::for_kind(P::KIND, true),
            vec![P::default(); count],
        ))
    }

    /// Wrap row-major pixels. Fails unless `pixels.len() == width * height`.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<P>) -> Result<Self, PnmError> {
        let count = pixel_count(width, height)?;
        if pixels.len() != count {
            return Err(PnmError::InvalidDimensions(format!(
                "{width}x{height} needs {count} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self::from_parts(
            width,
            height,
            P::DEFAULT_MAXVAL,
            NetpbmFormat::for_kind(P::KIND, true),
            pixels,
        ))
    }

    /// Build from a slice of equally long rows.
    pub fn from_rows<R: AsRef<[P]>>(rows: &[R]) -> Result<Self, PnmError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut pixels = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(PnmError::RowLengthMismatch {
                    row,
                    expected: width,
                    actual: r.len(),
                });
            }
            pixels.extend_from_slice(r);
        }
        let width = u32::try_from(width).map_err(|_| {
            PnmError::InvalidDimensions(format!("row width {width} does not fit in u32"))
        })?;
        let height = u32::try_from(rows.len()).map_err(|_| {
            PnmError::InvalidDimensions(format!("row count {} does not fit in u32", rows.len()))
        })?;
        Self::from_vec(width, height, pixels)
    }

    /// Set the max value. Bitmaps only accept 1.
    pub fn with_maxval(mut self, maxval: u8) -> Result<Self, PnmError> {
        if maxval == 0 || (!P::KIND.has_maxval() && maxval != 1) {
            return Err(PnmError::InvalidMaxValue(format!(
                "{maxval} is not valid for {:?} pixels",
                P::KIND
            )));
        }
        self.maxval = maxval;
        Ok(self)
    }

    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        maxval: u8,
        format: NetpbmFormat,
        pixels: Vec<P>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        debug_assert_eq!(format.kind(), P::KIND);
        Self {
            width,
            height,
            maxval,
            format,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn format(&self) -> NetpbmFormat {
        self.format
    }

    /// Retag the buffer, e.g. P2 → P5. The tag must belong to this pixel kind.
    pub fn set_format(&mut self, format: NetpbmFormat) -> Result<(), PnmError> {
        if format.kind() != P::KIND {
            return Err(PnmError::KindMismatch {
                expected: P::KIND,
                actual: format.kind(),
            });
        }
        self.format = format;
        Ok(())
    }

    /// Sample upper bound; `None` for bitmaps.
    pub fn max_value(&self) -> Option<u8> {
        P::KIND.has_maxval().then_some(self.maxval)
    }

    pub(crate) fn maxval(&self) -> u8 {
        self.maxval
    }

    pub(crate) fn set_maxval(&mut self, maxval: u8) {
        self.maxval = maxval;
    }

    pub fn kind(&self) -> PixelKind {
        P::KIND
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }

    /// Row `y`. Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[P] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Row `y`, mutably. Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }

    pub fn rows(&self) -> ChunksExact<'_, P> {
        self.pixels.chunks_exact(self.width as usize)
    }

    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, P> {
        self.pixels.chunks_exact_mut(self.width as usize)
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` lies outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, pixel: P) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} raster",
            self.width,
            self.height
        );
        self.pixels[y as usize * self.width as usize + x as usize] = pixel;
    }

    /// Replace dimensions and pixels together (rotation).
    pub(crate) fn replace_pixels(&mut self, width: u32, height: u32, pixels: Vec<P>) {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, P> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }
}

#[cfg(feature = "imgref")]
impl<P: Pixel> TryFrom<imgref::ImgVec<P>> for Raster<P> {
    type Error = PnmError;

    fn try_from(img: imgref::ImgVec<P>) -> Result<Self, PnmError> {
        let too_large = |_| PnmError::InvalidDimensions("image exceeds u32 dimensions".into());
        let width = u32::try_from(img.width()).map_err(too_large)?;
        let height = u32::try_from(img.height()).map_err(too_large)?;
        let pixels: Vec<P> = img.as_ref().pixels().collect();
        Self::from_vec(width, height, pixels)
    }
}
