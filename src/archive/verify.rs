//! Archive integrity checks.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Lowercase hex SHA-256 of a file's contents.
pub fn sha256_file(path: &Path) -> Result<String> {
    let data = fs::read(path)?;
    let digest = Sha256::digest(&data);
    Ok(hex::encode(&digest[..]))
}

/// Whether the file hashes to `expected` (case-sensitive hex comparison).
pub fn verify_digest(path: &Path, expected: &str) -> Result<bool> {
    let actual = sha256_file(path)?;
    if actual != expected {
        tracing::debug!(
            "Digest mismatch for {}: expected {}, got {}",
            path.display(),
            expected,
            actual
        );
        return Ok(false);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // sha256("hello world")
    const HELLO_DIGEST: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    fn hello_file(temp: &TempDir) -> std::path::PathBuf {
        let path = temp.path().join("hello.txt");
        fs::write(&path, "hello world").unwrap();
        path
    }

    #[test]
    fn computes_known_digest() {
        let temp = TempDir::new().unwrap();
        assert_eq!(sha256_file(&hello_file(&temp)).unwrap(), HELLO_DIGEST);
    }

    #[test]
    fn matching_digest_verifies() {
        let temp = TempDir::new().unwrap();
        assert!(verify_digest(&hello_file(&temp), HELLO_DIGEST).unwrap());
    }

    #[test]
    fn different_digest_fails() {
        let temp = TempDir::new().unwrap();
        let other = "0".repeat(64);
        assert!(!verify_digest(&hello_file(&temp), &other).unwrap());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        let upper = HELLO_DIGEST.to_uppercase();
        assert!(!verify_digest(&hello_file(&temp), &upper).unwrap());
    }

    #[test]
    fn missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(verify_digest(&temp.path().join("absent"), HELLO_DIGEST).is_err());
    }
}
