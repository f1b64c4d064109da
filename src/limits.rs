use crate::error::PnmError;
use crate::pixel::Pixel;

/// Caps applied once the header is parsed, before any pixel storage is
/// allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes of decoded pixel storage, counted in `P` values
    /// (1 byte per bit or gray pixel, 3 per color pixel).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject a `width`×`height` buffer of `P` breaking any cap.
    pub(crate) fn check_buffer<P: Pixel>(&self, width: u32, height: u32) -> Result<(), PnmError> {
        let pixels = u64::from(width) * u64::from(height);
        let bytes = pixels.saturating_mul(size_of::<P>() as u64);
        let caps = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("pixel storage bytes", bytes, self.max_memory_bytes),
        ];
        for (what, value, cap) in caps {
            if let Some(cap) = cap
                && value > cap
            {
                return Err(PnmError::LimitExceeded(format!(
                    "{:?} {what} {value} exceeds limit {cap}",
                    P::KIND
                )));
            }
        }
        Ok(())
    }
}

/// Up-front capacity for `claimed` text-decoded values when `remaining`
/// input bytes are left. Each text value takes at least one byte, so the
/// header alone never sizes the allocation.
pub(crate) fn text_reservation(claimed: usize, remaining: usize) -> usize {
    claimed.min(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    #[test]
    fn default_limits_accept_anything() {
        let limits = Limits::default();
        assert!(limits.check_buffer::<RGB8>(u32::MAX, u32::MAX).is_ok());
    }

    #[test]
    fn width_and_pixel_caps() {
        let limits = Limits {
            max_width: Some(10),
            max_pixels: Some(50),
            ..Default::default()
        };
        assert!(limits.check_buffer::<u8>(10, 5).is_ok());
        assert!(matches!(
            limits.check_buffer::<u8>(11, 1),
            Err(PnmError::LimitExceeded(_))
        ));
        assert!(matches!(
            limits.check_buffer::<u8>(10, 6),
            Err(PnmError::LimitExceeded(_))
        ));
    }

    #[test]
    fn memory_cap_counts_pixel_size() {
        let limits = Limits {
            max_memory_bytes: Some(12),
            ..Default::default()
        };
        assert!(limits.check_buffer::<u8>(4, 3).is_ok());
        assert!(limits.check_buffer::<bool>(4, 3).is_ok());
        assert!(limits.check_buffer::<RGB8>(2, 2).is_ok());
        let err = limits.check_buffer::<RGB8>(4, 3).unwrap_err();
        assert!(matches!(err, PnmError::LimitExceeded(ref m) if m.contains("storage bytes 36")));
    }

    #[test]
    fn reservation_bounded_by_input() {
        assert_eq!(text_reservation(9_000_000_000, 0), 0);
        assert_eq!(text_reservation(usize::MAX, 17), 17);
        assert_eq!(text_reservation(6, 100), 6);
    }
}
