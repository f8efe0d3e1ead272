use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Reads the content to segment from a file, or from stdin when no path
/// is given.
pub fn read_content(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(InputError::NotFound(path.to_path_buf()));
            }
            fs::read_to_string(path).map_err(InputError::Io)
        }
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
