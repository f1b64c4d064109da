//! # zenpbm
//!
//! Netpbm P1–P6 (PBM, PGM, PPM) decoder and encoder, with in-place raster
//! transforms and primitive shape drawing.
//!
//! ## Supported Formats
//!
//! - **P1** / **P4**: bitmap. P1 rows are `0`/`1` tokens; P4 rows are one
//!   line of characters per row, `'1'` being ink.
//! - **P2** / **P5**: grayscale, 8-bit samples (ASCII / raw).
//! - **P3** / **P6**: RGB, 8-bit samples (ASCII / raw).
//!
//! Headers may carry blank lines and `#` comments before every field. Text
//! pixel data is one image row per line.
//!
//! ## Non-Goals
//!
//! - PAM, PFM and other formats
//! - 16-bit samples (maxval above 255)
//! - Streaming decode: the whole image is materialized
//! - Color management and anti-aliasing
//!
//! ## Usage
//!
//! ```no_run
//! use zenpbm::{AnyRaster, Pixmap, Point, RGB8, ThresholdPolicy};
//!
//! let mut image = zenpbm::load("photo.ppm")?;
//! image.rotate_90_cw();
//! image.invert();
//! zenpbm::save(&image, "rotated.ppm")?;
//!
//! let mut canvas = Pixmap::new(64, 64)?;
//! canvas.draw_filled_circle(Point::new(32, 32), 20, RGB8::new(255, 0, 0));
//! let bits = canvas.to_bitmap_with(ThresholdPolicy::LightIsOn);
//! zenpbm::save(&AnyRaster::from(bits), "disc.pbm")?;
//! # Ok::<(), zenpbm::PnmError>(())
//! ```

#![forbid(unsafe_code)]

mod decode;
mod draw;
mod encode;
mod error;
mod fs;
mod image;
mod info;
mod limits;
mod pixel;
mod pnm;
mod raster;
mod transform;

// Re-exports
pub use decode::DecodeRequest;
pub use draw::Point;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::PnmError;
pub use fs::{load, save};
pub use image::AnyRaster;
pub use info::{ImageInfo, NetpbmFormat};
pub use limits::Limits;
pub use pixel::{Intensity, Pixel, PixelKind};
pub use raster::{Bitmap, Graymap, Pixmap, Raster};
pub use rgb::RGB8;
pub use transform::ThresholdPolicy;

/// Decode any P1–P6 image.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<AnyRaster, PnmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode a buffer under its own format tag.
pub fn encode<P: Pixel>(raster: &Raster<P>, stop: impl Stop) -> Result<Vec<u8>, PnmError> {
    EncodeRequest::new().encode(raster, stop)
}
