//! Pixel decoding for P1–P6.

use enough::Stop;

use super::header::{LineReader, PnmHeader, parse_uint, tokens};
use crate::error::PnmError;
use crate::info::NetpbmFormat;
use crate::limits::{Limits, text_reservation};
use crate::pixel::Pixel;
use crate::raster::{Raster, pixel_count};

/// Decode the pixels following `header` into a buffer of `P`.
///
/// `reader` must sit right after the header's last line.
pub(crate) fn decode_pixels<P: Pixel>(
    data: &[u8],
    reader: &mut LineReader<'_>,
    header: &PnmHeader,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<P>, PnmError> {
    if header.format.kind() != P::KIND {
        return Err(PnmError::KindMismatch {
            expected: P::KIND,
            actual: header.format.kind(),
        });
    }

    let count = pixel_count(header.width, header.height)?;
    if let Some(limits) = limits {
        limits.check_buffer::<P>(header.width, header.height)?;
    }

    stop.check()?;

    let pixels: Vec<P> = match header.format {
        NetpbmFormat::PgmBinary | NetpbmFormat::PpmBinary => {
            decode_raw(data, header, count, stop)?
        }
        _ => {
            let remaining = data.len().saturating_sub(header.data_offset);
            decode_text(reader, header, count, remaining, stop)?
        }
    };

    if P::KIND.has_maxval() && pixels.iter().any(|p| p.max_sample() > header.maxval) {
        log::warn!(
            "{} image has samples above its max value {}",
            header.format,
            header.maxval
        );
    }

    Ok(Raster::from_parts(
        header.width,
        header.height,
        header.maxval,
        header.format,
        pixels,
    ))
}

/// P5/P6: one byte per sample straight after the header.
fn decode_raw<P: Pixel>(
    data: &[u8],
    header: &PnmHeader,
    count: usize,
    stop: &dyn Stop,
) -> Result<Vec<P>, PnmError> {
    let channels = P::KIND.channels();
    let needed = count
        .checked_mul(channels)
        .ok_or(PnmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    let raw = data
        .get(header.data_offset..)
        .and_then(|d| d.get(..needed))
        .ok_or(PnmError::UnexpectedEof)?;

    let row_bytes = header.width as usize * channels;
    let mut pixels = Vec::with_capacity(count);
    for (row, chunk) in raw.chunks_exact(row_bytes).enumerate() {
        if row % 16 == 0 {
            stop.check()?;
        }
        pixels.extend(chunk.chunks_exact(channels).map(P::from_samples));
    }
    Ok(pixels)
}

/// P1–P4: one pixel row per line.
///
/// P1–P3 rows are meaningful lines split into tokens. P4 rows are taken
/// verbatim: only empty lines and lines starting with `#` are skipped.
fn decode_text<P: Pixel>(
    reader: &mut LineReader<'_>,
    header: &PnmHeader,
    count: usize,
    remaining: usize,
    stop: &dyn Stop,
) -> Result<Vec<P>, PnmError> {
    let width = header.width as usize;
    let channels = P::KIND.channels();
    let expected = width.saturating_mul(channels);
    let mut pixels = Vec::with_capacity(text_reservation(count, remaining));
    let mut samples = Vec::with_capacity(text_reservation(expected, remaining));

    for row in 0..header.height as usize {
        if row % 16 == 0 {
            stop.check()?;
        }

        if header.format == NetpbmFormat::PbmBinary {
            let line = reader.next_row().ok_or(PnmError::UnexpectedEof)?;
            if line.len() < width {
                return Err(PnmError::RowLengthMismatch {
                    row,
                    expected: width,
                    actual: line.len(),
                });
            }
            pixels.extend(line[..width].iter().map(|&c| P::from_samples(&[u8::from(c == b'1')])));
            continue;
        }

        let line = reader.next_meaningful().ok_or(PnmError::UnexpectedEof)?;
        samples.clear();
        for token in tokens(line) {
            samples.push(parse_sample(token, header.format, row)?);
        }
        if samples.len() != expected {
            return Err(PnmError::RowLengthMismatch {
                row,
                expected,
                actual: samples.len(),
            });
        }
        pixels.extend(samples.chunks_exact(channels).map(P::from_samples));
    }
    Ok(pixels)
}

fn parse_sample(token: &[u8], format: NetpbmFormat, row: usize) -> Result<u8, PnmError> {
    let value = parse_uint(token);
    let limit = if format == NetpbmFormat::PbmAscii { 1 } else { 255 };
    match value {
        Some(v) if v <= limit => Ok(v as u8),
        _ => Err(PnmError::InvalidData(format!(
            "row {row}: '{}' is not a {format} sample (0..={limit})",
            String::from_utf8_lossy(token)
        ))),
    }
}
