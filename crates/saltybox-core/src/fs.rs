//! Filesystem helpers.
//!
//! Output files hold either plaintext or material that decrypts to it, so
//! they are created with owner-only permissions on Unix.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, SaltyboxError};

/// Read a file's entire contents.
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| SaltyboxError::io("read from", path, e))
}

/// Write `contents` to `path`, creating the file or truncating an existing
/// one. Newly created files get mode 0600 on Unix; an existing file keeps
/// its permissions.
pub(crate) fn write_secure(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .map_err(|e| SaltyboxError::io("write to", path, e))?;
    file.write_all(contents)
        .map_err(|e| SaltyboxError::io("write to", path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_secure_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out");

        write_secure(&path, b"contents").unwrap();
        assert_eq!(read_bytes(&path).unwrap(), b"contents");
    }

    #[test]
    fn test_write_secure_truncates_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out");

        write_secure(&path, b"something rather long").unwrap();
        write_secure(&path, b"short").unwrap();
        assert_eq!(read_bytes(&path).unwrap(), b"short");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_secure_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("out");

        write_secure(&path, b"secret").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = read_bytes(Path::new("/nonexistent/saltybox-test")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/saltybox-test"));
    }
}
