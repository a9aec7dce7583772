use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ConvertError, Result};
use crate::image::PixelBuffer;
use crate::imgproc::{build_mask, pack_bits};
use crate::source::Source;

pub const MASK_EXTENSION: &str = "bin";

/// Result of converting one tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub src: PathBuf,
    pub dest: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

/// Packed mask of an image: `ceil(width * height / 8)` bytes, no header.
pub fn mask_bytes(image: &PixelBuffer) -> Vec<u8> {
    pack_bits(&build_mask(image))
}

/// `<dest_dir>/<stem of src>.bin`
pub fn output_path(dest_dir: &Path, src: &Path) -> PathBuf {
    let mut name = src.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(MASK_EXTENSION);
    dest_dir.join(name)
}

/// Creates or truncates `dest` and writes `bytes` to it. The handle is
/// dropped before returning on every path.
pub fn write_mask(dest: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| ConvertError::Write {
        path: dest.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(dest).map_err(write_err)?);
    writer.write_all(bytes).map_err(write_err)?;
    // flush here, Drop would swallow the error
    writer.flush().map_err(write_err)
}

/// Decodes `src`, reduces it to a mask and writes it to `dest`.
pub fn convert_file<S: Source + ?Sized>(
    source: &mut S,
    src: &Path,
    dest: &Path,
) -> Result<Conversion> {
    if let Ok(meta) = std::fs::metadata(src) {
        if !meta.is_file() {
            return Err(ConvertError::NotAFile {
                path: src.to_path_buf(),
            });
        }
    }

    let image = source.decode(src)?;
    let packed = mask_bytes(&image);
    debug!(
        "{}: {}x{}x{}ch, {} pixels -> {} bytes",
        src.display(),
        image.width(),
        image.height(),
        image.format().channels(),
        image.pixel_count(),
        packed.len()
    );
    write_mask(dest, &packed)?;

    Ok(Conversion {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        width: image.width(),
        height: image.height(),
        bytes: packed.len(),
    })
}
