use crate::ports::outbound::PayloadReader;
use crate::shared::error::RadarError;
use crate::shared::security::{validate_not_symlink, validate_payload_file, MAX_PAYLOAD_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// FileSystemReader adapter for reading a payload file
///
/// Accepts both the bare JSON array and the JavaScript module that declares
/// it; unwrapping happens in the loader.
pub struct FileSystemReader {
    path: PathBuf,
}

impl FileSystemReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn not_found(&self) -> RadarError {
        let suggestion = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => format!(
                "Directory \"{}\" does not exist. Check the --input path.",
                parent.display()
            ),
            _ => "Check the --input path, or omit it to use the embedded dataset.".to_string(),
        };
        RadarError::PayloadNotFound {
            path: self.path.clone(),
            suggestion,
        }
    }
}

impl PayloadReader for FileSystemReader {
    fn read_payload(&self) -> Result<String> {
        if fs::symlink_metadata(&self.path).is_err() {
            return Err(self.not_found().into());
        }

        validate_not_symlink(&self.path, "payload input").map_err(|e| {
            RadarError::SecurityError {
                path: self.path.clone(),
                reason: e.to_string(),
                hint: "Pass the real file path instead of a link to it".to_string(),
            }
        })?;

        validate_payload_file(&self.path, MAX_PAYLOAD_SIZE).map_err(|e| {
            RadarError::PayloadReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        let content = fs::read_to_string(&self.path).map_err(|e| RadarError::PayloadReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(content)
    }

    fn source_label(&self) -> String {
        self.path.display().to_string()
    }
}
