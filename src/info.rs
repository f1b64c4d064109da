use core::fmt;

use crate::error::PnmError;
use crate::pixel::PixelKind;

/// Netpbm format tag, identified by its two-character magic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetpbmFormat {
    /// P1: ASCII bitmap (PBM).
    PbmAscii,
    /// P2: ASCII grayscale (PGM).
    PgmAscii,
    /// P3: ASCII color (PPM).
    PpmAscii,
    /// P4: bitmap with one character row per line.
    PbmBinary,
    /// P5: raw grayscale, one byte per sample.
    PgmBinary,
    /// P6: raw color, three bytes per pixel.
    PpmBinary,
}

impl NetpbmFormat {
    /// The magic string, e.g. `"P3"`.
    pub fn magic(&self) -> &'static str {
        match self {
            Self::PbmAscii => "P1",
            Self::PgmAscii => "P2",
            Self::PpmAscii => "P3",
            Self::PbmBinary => "P4",
            Self::PgmBinary => "P5",
            Self::PpmBinary => "P6",
        }
    }

    /// Parse a magic token.
    pub fn from_magic(magic: &[u8]) -> Option<Self> {
        match magic {
            b"P1" => Some(Self::PbmAscii),
            b"P2" => Some(Self::PgmAscii),
            b"P3" => Some(Self::PpmAscii),
            b"P4" => Some(Self::PbmBinary),
            b"P5" => Some(Self::PgmBinary),
            b"P6" => Some(Self::PpmBinary),
            _ => None,
        }
    }

    /// Pixel kind this tag stores.
    pub fn kind(&self) -> PixelKind {
        match self {
            Self::PbmAscii | Self::PbmBinary => PixelKind::Bit,
            Self::PgmAscii | Self::PgmBinary => PixelKind::Gray,
            Self::PpmAscii | Self::PpmBinary => PixelKind::Rgb,
        }
    }

    pub fn is_ascii(&self) -> bool {
        matches!(self, Self::PbmAscii | Self::PgmAscii | Self::PpmAscii)
    }

    /// The tag of `kind` in the same ASCII/binary family as `self`.
    pub fn with_kind(&self, kind: PixelKind) -> Self {
        Self::for_kind(kind, self.is_ascii())
    }

    pub(crate) fn for_kind(kind: PixelKind, ascii: bool) -> Self {
        match (kind, ascii) {
            (PixelKind::Bit, true) => Self::PbmAscii,
            (PixelKind::Gray, true) => Self::PgmAscii,
            (PixelKind::Rgb, true) => Self::PpmAscii,
            (PixelKind::Bit, false) => Self::PbmBinary,
            (PixelKind::Gray, false) => Self::PgmBinary,
            (PixelKind::Rgb, false) => Self::PpmBinary,
        }
    }
}

impl fmt::Display for NetpbmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

/// Header information, available without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: NetpbmFormat,
    /// `None` for bitmaps.
    pub maxval: Option<u8>,
}

impl ImageInfo {
    /// Probe a Netpbm header.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        crate::pnm::probe_header(data)
    }
}
