use core::fmt::Debug;

use rgb::RGB8;

/// Which family a pixel type belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelKind {
    /// One bit per pixel (PBM). `true` is ink (black).
    Bit,
    /// One 8-bit sample per pixel (PGM).
    Gray,
    /// Three 8-bit samples per pixel (PPM).
    Rgb,
}

impl PixelKind {
    /// Number of samples stored per pixel.
    pub fn channels(&self) -> usize {
        match self {
            Self::Bit | Self::Gray => 1,
            Self::Rgb => 3,
        }
    }

    /// Whether pixels of this kind carry a maxval bound.
    pub fn has_maxval(&self) -> bool {
        !matches!(self, Self::Bit)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for u8 {}
    impl Sealed for rgb::RGB8 {}
}

/// A pixel type a [`crate::Raster`] can hold.
///
/// Implemented for `bool` (bitmap), `u8` (grayscale) and [`RGB8`] (color).
pub trait Pixel: Copy + Default + PartialEq + Debug + Send + Sync + private::Sealed {
    const KIND: PixelKind;

    /// Bound stored in freshly constructed buffers.
    const DEFAULT_MAXVAL: u8;

    /// Photometric inverse relative to `maxval`.
    fn invert(self, maxval: u8) -> Self;

    /// Build a pixel from exactly `KIND.channels()` samples.
    fn from_samples(samples: &[u8]) -> Self;

    /// Append this pixel's samples to `out`.
    fn push_samples(self, out: &mut Vec<u8>);

    /// Largest sample in this pixel.
    fn max_sample(self) -> u8;
}

impl Pixel for bool {
    const KIND: PixelKind = PixelKind::Bit;
    const DEFAULT_MAXVAL: u8 = 1;

    #[inline]
    fn invert(self, _maxval: u8) -> Self {
        !self
    }

    #[inline]
    fn from_samples(samples: &[u8]) -> Self {
        samples[0] != 0
    }

    #[inline]
    fn push_samples(self, out: &mut Vec<u8>) {
        out.push(u8::from(self));
    }

    #[inline]
    fn max_sample(self) -> u8 {
        u8::from(self)
    }
}

impl Pixel for u8 {
    const KIND: PixelKind = PixelKind::Gray;
    const DEFAULT_MAXVAL: u8 = 255;

    #[inline]
    fn invert(self, maxval: u8) -> Self {
        maxval.saturating_sub(self)
    }

    #[inline]
    fn from_samples(samples: &[u8]) -> Self {
        samples[0]
    }

    #[inline]
    fn push_samples(self, out: &mut Vec<u8>) {
        out.push(self);
    }

    #[inline]
    fn max_sample(self) -> u8 {
        self
    }
}

impl Pixel for RGB8 {
    const KIND: PixelKind = PixelKind::Rgb;
    const DEFAULT_MAXVAL: u8 = 255;

    #[inline]
    fn invert(self, maxval: u8) -> Self {
        self.map_samples(|s| maxval.saturating_sub(s))
    }

    #[inline]
    fn from_samples(samples: &[u8]) -> Self {
        RGB8::new(samples[0], samples[1], samples[2])
    }

    #[inline]
    fn push_samples(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[self.r, self.g, self.b]);
    }

    #[inline]
    fn max_sample(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}

/// Pixels measured against a maxval: grayscale and color.
pub trait Intensity: Pixel {
    /// Apply `f` to every sample.
    fn map_samples(self, f: impl Fn(u8) -> u8) -> Self;

    /// Single-sample brightness. Color pixels use the truncated channel mean.
    fn intensity(self) -> u8;
}

impl Intensity for u8 {
    #[inline]
    fn map_samples(self, f: impl Fn(u8) -> u8) -> Self {
        f(self)
    }

    #[inline]
    fn intensity(self) -> u8 {
        self
    }
}

impl Intensity for RGB8 {
    #[inline]
    fn map_samples(self, f: impl Fn(u8) -> u8) -> Self {
        RGB8::new(f(self.r), f(self.g), f(self.b))
    }

    #[inline]
    fn intensity(self) -> u8 {
        ((u32::from(self.r) + u32::from(self.g) + u32::from(self.b)) / 3) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_invert_saturates_above_maxval() {
        assert_eq!(100u8.invert(255), 155);
        assert_eq!(200u8.invert(100), 0);
    }

    #[test]
    fn rgb_intensity_truncates() {
        assert_eq!(RGB8::new(1, 1, 2).intensity(), 1);
        assert_eq!(RGB8::new(255, 255, 255).intensity(), 255);
    }

    #[test]
    fn sample_roundtrip() {
        let mut out = Vec::new();
        RGB8::new(1, 2, 3).push_samples(&mut out);
        true.push_samples(&mut out);
        assert_eq!(out, [1, 2, 3, 1]);
        assert_eq!(RGB8::from_samples(&out[..3]), RGB8::new(1, 2, 3));
        assert!(bool::from_samples(&out[3..]));
    }
}
