use crate::error::PnmError;
use crate::info::NetpbmFormat;
use crate::pixel::PixelKind;
use crate::raster::{Bitmap, Graymap, Pixmap};

/// A decoded image whose pixel kind is only known at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyRaster {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

macro_rules! each {
    ($self:expr, $r:ident => $body:expr) => {
        match $self {
            AnyRaster::Bitmap($r) => $body,
            AnyRaster::Graymap($r) => $body,
            AnyRaster::Pixmap($r) => $body,
        }
    };
}

impl AnyRaster {
    pub fn width(&self) -> u32 {
        each!(self, r => r.width())
    }

    pub fn height(&self) -> u32 {
        each!(self, r => r.height())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        each!(self, r => r.dimensions())
    }

    pub fn format(&self) -> NetpbmFormat {
        each!(self, r => r.format())
    }

    pub fn kind(&self) -> PixelKind {
        each!(self, r => r.kind())
    }

    /// `None` for bitmaps.
    pub fn max_value(&self) -> Option<u8> {
        each!(self, r => r.max_value())
    }

    /// Retag within the same pixel kind.
    pub fn set_format(&mut self, format: NetpbmFormat) -> Result<(), PnmError> {
        each!(self, r => r.set_format(format))
    }

    pub fn invert(&mut self) {
        each!(self, r => r.invert())
    }

    pub fn flip_horizontal(&mut self) {
        each!(self, r => r.flip_horizontal())
    }

    pub fn flip_vertical(&mut self) {
        each!(self, r => r.flip_vertical())
    }

    pub fn rotate_90_cw(&mut self) {
        each!(self, r => r.rotate_90_cw())
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            Self::Bitmap(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_graymap(&self) -> Option<&Graymap> {
        match self {
            Self::Graymap(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_pixmap(&self) -> Option<&Pixmap> {
        match self {
            Self::Pixmap(r) => Some(r),
            _ => None,
        }
    }

    /// Downconvert to a bitmap with the default threshold policy.
    /// Bitmaps are returned unchanged.
    pub fn into_bitmap(self) -> Bitmap {
        match self {
            Self::Bitmap(r) => r,
            Self::Graymap(r) => r.to_bitmap(),
            Self::Pixmap(r) => r.to_bitmap(),
        }
    }

    pub(crate) fn encode(&self, stop: &dyn enough::Stop) -> Result<Vec<u8>, PnmError> {
        each!(self, r => crate::pnm::encode(r, r.format(), stop))
    }
}

impl From<Bitmap> for AnyRaster {
    fn from(r: Bitmap) -> Self {
        Self::Bitmap(r)
    }
}

impl From<Graymap> for AnyRaster {
    fn from(r: Graymap) -> Self {
        Self::Graymap(r)
    }
}

impl From<Pixmap> for AnyRaster {
    fn from(r: Pixmap) -> Self {
        Self::Pixmap(r)
    }
}

impl TryFrom<AnyRaster> for Bitmap {
    type Error = PnmError;

    fn try_from(image: AnyRaster) -> Result<Self, PnmError> {
        match image {
            AnyRaster::Bitmap(r) => Ok(r),
            other => Err(PnmError::KindMismatch {
                expected: PixelKind::Bit,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<AnyRaster> for Graymap {
    type Error = PnmError;

    fn try_from(image: AnyRaster) -> Result<Self, PnmError> {
        match image {
            AnyRaster::Graymap(r) => Ok(r),
            other => Err(PnmError::KindMismatch {
                expected: PixelKind::Gray,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<AnyRaster> for Pixmap {
    type Error = PnmError;

    fn try_from(image: AnyRaster) -> Result<Self, PnmError> {
        match image {
            AnyRaster::Pixmap(r) => Ok(r),
            other => Err(PnmError::KindMismatch {
                expected: PixelKind::Rgb,
                actual: other.kind(),
            }),
        }
    }
}
