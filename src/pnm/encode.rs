//! PNM encoder: P1–P6.

use enough::Stop;

use crate::error::PnmError;
use crate::info::NetpbmFormat;
use crate::pixel::Pixel;
use crate::raster::Raster;

/// Serialize `raster` under `format`, which must match the pixel kind.
pub(crate) fn encode_raster<P: Pixel>(
    raster: &Raster<P>,
    format: NetpbmFormat,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    if format.kind() != P::KIND {
        return Err(PnmError::KindMismatch {
            expected: P::KIND,
            actual: format.kind(),
        });
    }

    let (width, height) = raster.dimensions();
    let mut header = format!("{format}\n{width} {height}\n");
    if P::KIND.has_maxval() {
        header.push_str(&format!("{}\n", raster.maxval()));
    }

    let samples = raster.pixels().len() * P::KIND.channels();
    let body = if format.is_ascii() {
        samples.saturating_mul(4)
    } else {
        samples + height as usize
    };
    let mut out = Vec::with_capacity(header.len().saturating_add(body));
    out.extend_from_slice(header.as_bytes());

    stop.check()?;

    let mut row_samples = Vec::with_capacity(width as usize * P::KIND.channels());
    for (y, row) in raster.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        row_samples.clear();
        for &p in row {
            p.push_samples(&mut row_samples);
        }
        match format {
            NetpbmFormat::PgmBinary | NetpbmFormat::PpmBinary => {
                out.extend_from_slice(&row_samples);
            }
            NetpbmFormat::PbmBinary => {
                out.extend(row_samples.iter().map(|&s| b'0' + s));
                out.push(b'\n');
            }
            _ => {
                for (i, &s) in row_samples.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    push_decimal(&mut out, s);
                }
                out.push(b'\n');
            }
        }
    }

    log::debug!(
        "encoded {format} {width}x{height} into {} bytes",
        out.len()
    );
    Ok(out)
}

fn push_decimal(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + (value / 10) % 10);
    }
    out.push(b'0' + value % 10);
}
