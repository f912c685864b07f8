//! Read-side filesystem access for catalog and platform-table sources.
//!
//! Paths are UTF-8 throughout and every lookup goes through a `cap-std`
//! directory handle opened with ambient authority.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};

/// Open the source file at `path` for reading.
pub fn open_source(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the whole source file at `path` into a string.
pub fn read_source_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_source(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Whether `path` names an existing regular file.
///
/// Paths without a final component, such as `/` or `..`, are never files.
/// A missing file or a missing parent directory surfaces as
/// [`io::ErrorKind::NotFound`].
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let Some(name) = path.file_name() else {
        return Ok(false);
    };
    let dir = fs_utf8::Dir::open_ambient_dir(containing_dir(path), ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

fn containing_dir(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}
