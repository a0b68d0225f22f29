//! Export bundle extraction
//!
//! The result bundle is a zip archive holding one or more newline-delimited
//! data files. The tool treats it as opaque except for listing its entries
//! and extracting the first one.

use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::errors::{ArchiveError, ArchiveResult};

/// Lists the entry names of a zip archive held in memory
///
/// # Errors
///
/// Returns `ArchiveError::Zip` if the bytes are not a valid zip archive.
pub fn list_entries(bytes: &[u8]) -> ArchiveResult<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        names.push(archive.by_index(index)?.name().to_string());
    }
    Ok(names)
}

/// Extracts the first archive entry into `dest_dir` under the entry's name
///
/// Returns the path of the written file. An archive with no entries is a
/// defined error, not a panic; an entry whose name would escape `dest_dir`
/// (absolute, or traversing with `..`) is rejected.
///
/// # Errors
///
/// Returns `ArchiveError` if the archive is malformed or empty, the entry
/// name is unsafe, or the file cannot be written.
pub fn extract_first_entry(bytes: &[u8], dest_dir: &Path) -> ArchiveResult<PathBuf> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    if archive.is_empty() {
        return Err(ArchiveError::Empty);
    }

    let mut entry = archive.by_index(0)?;
    let relative = match entry.enclosed_name() {
        Some(name) => name.to_path_buf(),
        None => {
            return Err(ArchiveError::UnsafeEntryName {
                name: entry.name().to_string(),
            })
        }
    };

    let dest_path = dest_dir.join(relative);
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut output = fs::File::create(&dest_path)?;
    io::copy(&mut entry, &mut output)?;

    Ok(dest_path)
}
