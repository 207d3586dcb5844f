use std::fs;
use std::path::Path;

use super::error::MappingError;

/// Reads the whole mapping file into memory in one go. The handle is released
/// as soon as the read completes; nothing is streamed.
pub fn load(path: &Path) -> Result<String, MappingError> {
    if !path.is_file() {
        return Err(MappingError::FileNotFound(path.to_path_buf()));
    }

    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
#[path = "test_loader.rs"]
mod tests;
