//! # Expected Locations
//!
//! Maps a file record to the place the project layout says its file should be:
//!
//! - `cram` / `crai`: `<project>/Data/PolishedBams/<record.name>`
//! - `vcf`: the single `*.vcf.gz` in `<project>/VCF/Complete/`
//! - `tbi`: the single `*.vcf.gz.tbi` in the same directory
//!
//! The VCF directory is listed afresh for every record. A directory holding
//! more than one candidate is an error rather than a guess.

use crate::config::ReconcileConfig;
use crate::error::{FixError, Result};
use crate::model::{ExpectedLocation, FileRecord, FileType};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

pub const VCF_SUFFIX: &str = ".vcf.gz";
pub const TBI_SUFFIX: &str = ".vcf.gz.tbi";

/// Resolve where `record` should live. `Ok(None)` means the layout has no
/// answer for it (unknown type, no candidate file).
pub fn expected_location(
    record: &FileRecord,
    config: &ReconcileConfig,
) -> Result<Option<ExpectedLocation>> {
    match record.file_type {
        FileType::Cram | FileType::Crai => {
            // A bare filename only; no absolute paths or `..` out of the directory
            if Path::new(&record.name).file_name() != Some(OsStr::new(&record.name)) {
                return Ok(None);
            }
            Ok(Some(ExpectedLocation::new(&config.data_dir(), &record.name)))
        }
        FileType::Vcf => find_single(&config.vcf_dir(), VCF_SUFFIX),
        FileType::Tbi => find_single(&config.vcf_dir(), TBI_SUFFIX),
        FileType::Other => Ok(None),
    }
}

/// The one file in `dir` whose name ends with `suffix`.
pub fn find_single(dir: &Path, suffix: &str) -> Result<Option<ExpectedLocation>> {
    let entries = fs::read_dir(dir).map_err(|source| FixError::DirectoryListing {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FixError::DirectoryListing {
            dir: dir.to_path_buf(),
            source,
        })?;
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(suffix) {
                matches.push(name.to_string());
            }
        }
    }

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(ExpectedLocation::new(dir, &matches[0]))),
        count => Err(FixError::AmbiguousMatch {
            dir: dir.to_path_buf(),
            suffix: suffix.to_string(),
            count,
        }),
    }
}

/// Existence check, nothing more.
pub fn is_accessible(path: &Path) -> bool {
    !path.as_os_str().is_empty() && fs::metadata(path).is_ok()
}

/// Size of the file at `path`, if it can be stat'ed.
pub fn file_size(path: &Path) -> Option<u64> {
    if path.as_os_str().is_empty() {
        return None;
    }
    fs::metadata(path).ok().map(|m| m.len())
}
