//! File boundary: whole-file reads and writes.

use std::path::Path;

use enough::Unstoppable;

use crate::error::PnmError;
use crate::image::AnyRaster;
use crate::pixel::Pixel;
use crate::raster::Raster;

/// Read and decode a Netpbm file of any kind.
pub fn load(path: impl AsRef<Path>) -> Result<AnyRaster, PnmError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    crate::pnm::decode_any(&data, None, &Unstoppable)
}

/// Encode `image` under its own tag and write it to `path`.
pub fn save(image: &AnyRaster, path: impl AsRef<Path>) -> Result<(), PnmError> {
    let out = image.encode(&Unstoppable)?;
    write(&out, path.as_ref())
}

fn write(bytes: &[u8], path: &Path) -> Result<(), PnmError> {
    std::fs::write(path, bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

impl<P: Pixel> Raster<P> {
    /// Read a file whose tag must match `P`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PnmError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        crate::pnm::decode(&data, None, &Unstoppable)
    }

    /// Write under the buffer's own tag.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PnmError> {
        let out = crate::pnm::encode(self, self.format(), &Unstoppable)?;
        write(&out, path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Graymap;

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.pgm")).unwrap_err();
        assert!(matches!(err, PnmError::Io(_)));
    }

    #[test]
    fn typed_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.pgm");
        let g = Graymap::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
        g.save(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"P2\n2 2\n255\n1 2\n3 4\n");
        assert_eq!(Graymap::load(&path).unwrap(), g);
    }
}
