//! Netpbm family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! Headers are line-oriented: the tag, the dimensions and the max value each
//! start on their own meaningful line. Text pixel data is one image row per
//! line. P5/P6 pixel data is raw bytes after the header.

mod decode;
mod encode;
mod header;

use enough::Stop;

use crate::error::PnmError;
use crate::image::AnyRaster;
use crate::info::{ImageInfo, NetpbmFormat};
use crate::limits::Limits;
use crate::pixel::{Pixel, PixelKind};
use crate::raster::Raster;
use header::LineReader;

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, PnmError> {
    let header = header::parse_header(&mut LineReader::new(data))?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        format: header.format,
        maxval: header.format.kind().has_maxval().then_some(header.maxval),
    })
}

/// Decode into whichever buffer type the tag calls for.
pub(crate) fn decode_any(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<AnyRaster, PnmError> {
    let mut reader = LineReader::new(data);
    let header = header::parse_header(&mut reader)?;
    let image = match header.format.kind() {
        PixelKind::Bit => AnyRaster::Bitmap(decode::decode_pixels(
            data,
            &mut reader,
            &header,
            limits,
            stop,
        )?),
        PixelKind::Gray => AnyRaster::Graymap(decode::decode_pixels(
            data,
            &mut reader,
            &header,
            limits,
            stop,
        )?),
        PixelKind::Rgb => AnyRaster::Pixmap(decode::decode_pixels(
            data,
            &mut reader,
            &header,
            limits,
            stop,
        )?),
    };
    Ok(image)
}

/// Decode into a buffer of `P`, failing with `KindMismatch` on other tags.
pub(crate) fn decode<P: Pixel>(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<P>, PnmError> {
    let mut reader = LineReader::new(data);
    let header = header::parse_header(&mut reader)?;
    decode::decode_pixels(data, &mut reader, &header, limits, stop)
}

/// Encode `raster` as `format`.
pub(crate) fn encode<P: Pixel>(
    raster: &Raster<P>,
    format: NetpbmFormat,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    encode::encode_raster(raster, format, stop)
}
