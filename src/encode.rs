use enough::Stop;

use crate::error::PnmError;
use crate::info::NetpbmFormat;
use crate::pixel::Pixel;
use crate::raster::Raster;

/// Encode builder. Without a format override the buffer's own tag is used.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    format: Option<NetpbmFormat>,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write as `format` instead of the buffer's tag. The format must hold
    /// the buffer's pixel kind.
    pub fn with_format(mut self, format: NetpbmFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn encode<P: Pixel>(&self, raster: &Raster<P>, stop: impl Stop) -> Result<Vec<u8>, PnmError> {
        let format = self.format.unwrap_or(raster.format());
        crate::pnm::encode(raster, format, &stop)
    }
}
