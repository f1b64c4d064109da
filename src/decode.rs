use enough::Stop;

use crate::error::PnmError;
use crate::image::AnyRaster;
use crate::limits::Limits;
use crate::pixel::Pixel;
use crate::raster::Raster;

/// Decode builder: input bytes plus optional resource limits.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before allocating pixel storage.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode into the buffer kind named by the format tag.
    pub fn decode(&self, stop: impl Stop) -> Result<AnyRaster, PnmError> {
        crate::pnm::decode_any(self.data, self.limits, &stop)
    }

    /// Decode into a buffer of `P`. Other tags fail with
    /// [`PnmError::KindMismatch`].
    pub fn decode_as<P: Pixel>(&self, stop: impl Stop) -> Result<Raster<P>, PnmError> {
        crate::pnm::decode(self.data, self.limits, &stop)
    }
}
