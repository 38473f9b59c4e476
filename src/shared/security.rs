use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest payload file accepted (100 MB). The complete PNCP export for a
/// month stays well below this.
pub const MAX_PAYLOAD_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects `path` when it is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} of {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not accepted for {}.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Checks that `path` is a regular, non-symlinked file no larger than
/// `max_size`, returning its size.
pub fn validate_payload_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read payload metadata: {}", e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not accepted as payloads.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let size = metadata.len();
    if size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum payload size is {} bytes.",
            path.display(),
            size,
            max_size
        );
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.md");
        fs::write(&file_path, "# report").unwrap();

        assert!(validate_not_symlink(&file_path, "write").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/report.md");
        assert!(validate_not_symlink(&path, "write").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "[]").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "write").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_payload_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("payload.json");
        fs::write(&file_path, "[]").unwrap();

        assert_eq!(validate_payload_file(&file_path, MAX_PAYLOAD_SIZE).unwrap(), 2);
    }

    #[test]
    fn test_validate_payload_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = validate_payload_file(temp_dir.path(), MAX_PAYLOAD_SIZE).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_payload_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("payload.json");
        fs::write(&file_path, "[1, 2, 3]").unwrap();

        let err = validate_payload_file(&file_path, 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
