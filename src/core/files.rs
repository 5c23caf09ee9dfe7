//! File system helpers.

use std::{
    fs::{self, OpenOptions},
    io::{self, Read, Write},
    path::Path,
};

/// Try to read a file into a String.
///
/// Returns `Ok(None)` when the file does not exist; any other failure is an error.
pub fn try_read_to_string(path: &Path) -> io::Result<Option<String>> {
    let mut f = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let mut s = String::new();

    f.read_to_string(&mut s)?;

    Ok(Some(s))
}

/// Create (or truncate) a file for writing, creating parent directories first.
pub fn create_file(path: &Path) -> io::Result<fs::File> {
    create_parent(path)?;
    fs::File::create(path)
}

/// Append a string to the end of a file, creating it if needed.
pub fn append_string(path: &Path, contents: &str) -> io::Result<()> {
    create_parent(path)?;

    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    f.write_all(contents.as_bytes())
}

fn create_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
