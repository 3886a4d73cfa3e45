//! Reading the puzzle input from disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the whole input file, telling a missing file apart from other failures.
pub fn read_input(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
