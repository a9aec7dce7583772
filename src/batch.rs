use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::convert::{convert_file, output_path, Conversion};
use crate::error::{ConvertError, Result};
use crate::source::Source;

/// What to do when one tile fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it; later entries are not attempted.
    #[default]
    FailFast,
    /// Attempt every entry and collect failures in the report.
    KeepGoing,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<Conversion>,
    /// Entries that are not regular files.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<ConvertError>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Entries of `dir`, sorted by name. Not recursive.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let list_err = |source| ConvertError::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = std::fs::read_dir(dir)
        .map_err(list_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(list_err)?;
    entries.sort();
    Ok(entries)
}

/// Converts every regular file in `src_dir` into `<dest_dir>/<stem>.bin`.
/// `dest_dir` must already exist.
pub fn convert_dir<S: Source + ?Sized>(
    source: &mut S,
    src_dir: &Path,
    dest_dir: &Path,
    policy: FailurePolicy,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for src in list_entries(src_dir)? {
        if !src.is_file() {
            warn!("Skipping {}: not a regular file", src.display());
            report.skipped.push(src);
            continue;
        }

        let dest = output_path(dest_dir, &src);
        match convert_file(source, &src, &dest) {
            Ok(conversion) => {
                info!("{} converted to {}", src.display(), dest.display());
                report.converted.push(conversion);
            }
            Err(err) if policy == FailurePolicy::KeepGoing => {
                match std::error::Error::source(&err) {
                    Some(cause) => warn!("{}: {}", err, cause),
                    None => warn!("{}", err),
                }
                report.failed.push(err);
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        "Batch done: {} converted, {} failed, {} skipped",
        report.converted.len(),
        report.failed.len(),
        report.skipped.len()
    );
    Ok(report)
}
