//! In-place photometric and geometric transforms, plus downconversion
//! between the three buffer kinds.

use rgb::RGB8;

use crate::error::PnmError;
use crate::pixel::{Intensity, Pixel, PixelKind};
use crate::raster::{Bitmap, Graymap, Raster};

/// Which side of the `maxval / 2` threshold becomes ink when converting to
/// a bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThresholdPolicy {
    /// Intensities below the threshold are set (dark pixels stay dark).
    #[default]
    DarkIsOn,
    /// Intensities at or above the threshold are set.
    LightIsOn,
}

impl ThresholdPolicy {
    #[inline]
    fn is_on(self, intensity: u8, threshold: u8) -> bool {
        match self {
            Self::DarkIsOn => intensity < threshold,
            Self::LightIsOn => intensity >= threshold,
        }
    }
}

impl<P: Pixel> Raster<P> {
    /// Photometric inversion: bits flip, samples become `maxval - sample`.
    pub fn invert(&mut self) {
        let maxval = self.maxval();
        for p in self.pixels_mut() {
            *p = p.invert(maxval);
        }
    }

    /// Mirror left-right. The centre column of an odd width stays put.
    pub fn flip_horizontal(&mut self) {
        for row in self.rows_mut() {
            row.reverse();
        }
    }

    /// Mirror top-bottom by swapping row `y` with row `height - 1 - y`.
    pub fn flip_vertical(&mut self) {
        let w = self.width() as usize;
        let h = self.height() as usize;
        let pixels = self.pixels_mut();
        for y in 0..h / 2 {
            let (top, bottom) = pixels.split_at_mut((h - 1 - y) * w);
            top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
        }
    }

    /// Rotate a quarter turn clockwise. The old pixel at `(x, y)` moves to
    /// `(height - 1 - y, x)` and the dimensions swap.
    pub fn rotate_90_cw(&mut self) {
        let w = self.width() as usize;
        let h = self.height() as usize;
        let old = self.pixels();
        let mut rotated = Vec::with_capacity(old.len());
        for new_y in 0..w {
            for new_x in 0..h {
                rotated.push(old[(h - 1 - new_x) * w + new_y]);
            }
        }
        self.replace_pixels(h as u32, w as u32, rotated);
    }
}

impl<P: Intensity> Raster<P> {
    /// Rescale every sample to `round(sample * new_max / maxval)` and adopt
    /// `new_max` as the bound.
    pub fn rescale(&mut self, new_max: u32) -> Result<(), PnmError> {
        let new = match u8::try_from(new_max) {
            Ok(0) | Err(_) => return Err(PnmError::InvalidScale(new_max)),
            Ok(v) => v,
        };
        let old = u32::from(self.maxval());
        let scale = |s: u8| -> u8 {
            let v = (u32::from(s) * new_max * 2 + old) / (2 * old);
            v.min(new_max) as u8
        };
        for p in self.pixels_mut() {
            *p = p.map_samples(scale);
        }
        self.set_maxval(new);
        Ok(())
    }

    /// Threshold at `maxval / 2`, dark pixels becoming ink.
    pub fn to_bitmap(&self) -> Bitmap {
        self.to_bitmap_with(ThresholdPolicy::default())
    }

    /// Threshold at `maxval / 2` under an explicit policy. The result keeps
    /// the ASCII/binary family of the source tag.
    pub fn to_bitmap_with(&self, policy: ThresholdPolicy) -> Bitmap {
        let threshold = self.maxval() / 2;
        let bits = self
            .pixels()
            .iter()
            .map(|p| policy.is_on(p.intensity(), threshold))
            .collect();
        Raster::from_parts(
            self.width(),
            self.height(),
            1,
            self.format().with_kind(PixelKind::Bit),
            bits,
        )
    }
}

impl Raster<RGB8> {
    /// Average the channels (truncating) into a grayscale buffer with the
    /// same max value. P3 becomes P2, P6 becomes P5.
    pub fn to_graymap(&self) -> Graymap {
        let gray = self.pixels().iter().map(|p| p.intensity()).collect();
        Raster::from_parts(
            self.width(),
            self.height(),
            self.maxval(),
            self.format().with_kind(PixelKind::Gray),
            gray,
        )
    }
}

impl Raster<bool> {
    /// Expand to grayscale with maxval 1: ink becomes 0, paper becomes 1.
    pub fn to_graymap(&self) -> Graymap {
        let gray = self.pixels().iter().map(|&b| u8::from(!b)).collect();
        Raster::from_parts(
            self.width(),
            self.height(),
            1,
            self.format().with_kind(PixelKind::Gray),
            gray,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::NetpbmFormat;
    use crate::raster::Pixmap;

    fn gray_3x2() -> Graymap {
        Graymap::from_rows(&[[100u8, 150, 200], [50, 75, 100]]).unwrap()
    }

    #[test]
    fn invert_grayscale() {
        let mut g = gray_3x2();
        g.invert();
        assert_eq!(g.row(0), &[155, 105, 55]);
        assert_eq!(g.row(1), &[205, 180, 155]);
    }

    #[test]
    fn invert_uses_maxval() {
        let mut c = Pixmap::from_rows(&[[RGB8::new(0, 5, 15)]])
            .unwrap()
            .with_maxval(15)
            .unwrap();
        c.invert();
        assert_eq!(c.row(0), &[RGB8::new(15, 10, 0)]);
    }

    #[test]
    fn invert_bitmap_flips_bits() {
        let mut b = Bitmap::from_rows(&[[true, false]]).unwrap();
        b.invert();
        assert_eq!(b.row(0), &[false, true]);
    }

    #[test]
    fn flip_horizontal_odd_width() {
        let mut g = gray_3x2();
        g.flip_horizontal();
        assert_eq!(g.row(0), &[200, 150, 100]);
        assert_eq!(g.row(1), &[100, 75, 50]);
    }

    #[test]
    fn flip_vertical_swaps_rows() {
        let mut g = Graymap::from_rows(&[[1u8, 2], [3, 4], [5, 6]]).unwrap();
        g.flip_vertical();
        assert_eq!(g.pixels(), &[5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn rotate_moves_bottom_left_to_origin() {
        let mut g = gray_3x2();
        g.rotate_90_cw();
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g.get(0, 0), Some(50));
        assert_eq!(g.row(0), &[50, 100]);
        assert_eq!(g.row(1), &[75, 150]);
        assert_eq!(g.row(2), &[100, 200]);
    }

    #[test]
    fn rescale_rounds_and_updates_maxval() {
        let mut g = Graymap::from_rows(&[[0u8, 1, 2, 255]]).unwrap();
        g.rescale(15).unwrap();
        assert_eq!(g.max_value(), Some(15));
        // 2 * 15 / 255 = 0.117..., 255 maps to the new bound
        assert_eq!(g.row(0), &[0, 0, 0, 15]);

        let mut g = Graymap::from_rows(&[[0u8, 1, 2, 3]]).unwrap().with_maxval(3).unwrap();
        g.rescale(255).unwrap();
        assert_eq!(g.row(0), &[0, 85, 170, 255]);

        let mut g = Graymap::from_rows(&[[1u8]]).unwrap().with_maxval(2).unwrap();
        g.rescale(1).unwrap();
        assert_eq!(g.row(0), &[1]);
    }

    #[test]
    fn rescale_rejects_bad_bounds() {
        let mut g = gray_3x2();
        assert!(matches!(g.rescale(0), Err(PnmError::InvalidScale(0))));
        assert!(matches!(g.rescale(256), Err(PnmError::InvalidScale(256))));
        assert_eq!(g, gray_3x2());
    }

    #[test]
    fn color_to_gray_truncates_mean() {
        let mut c = Pixmap::from_rows(&[[RGB8::new(10, 20, 31), RGB8::new(255, 255, 255)]]).unwrap();
        c.set_format(NetpbmFormat::PpmBinary).unwrap();
        let g = c.to_graymap();
        assert_eq!(g.row(0), &[20, 255]);
        assert_eq!(g.format(), NetpbmFormat::PgmBinary);
        assert_eq!(g.max_value(), Some(255));
    }

    #[test]
    fn threshold_dark_is_on() {
        let g = Graymap::from_rows(&[[0u8, 126, 127, 255]]).unwrap();
        let b = g.to_bitmap();
        assert_eq!(b.row(0), &[true, true, false, false]);
        assert_eq!(b.format(), NetpbmFormat::PbmAscii);

        let b = g.to_bitmap_with(ThresholdPolicy::LightIsOn);
        assert_eq!(b.row(0), &[false, false, true, true]);
    }

    #[test]
    fn color_threshold_uses_mean() {
        let c = Pixmap::from_rows(&[[RGB8::new(255, 0, 0), RGB8::new(255, 255, 0)]]).unwrap();
        assert_eq!(c.to_bitmap().row(0), &[true, false]);
    }

    #[test]
    fn bitmap_to_graymap() {
        let b = Bitmap::from_rows(&[[true, false]]).unwrap();
        let g = b.to_graymap();
        assert_eq!(g.row(0), &[0, 1]);
        assert_eq!(g.max_value(), Some(1));
    }
}
