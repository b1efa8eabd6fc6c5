//! Commit message file access.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Handle to the commit message file git passes to the hook.
///
/// The message is only ever read fully and rewritten fully; there are no
/// partial edits. Nothing is written when the commit is rejected.
pub struct MessageFile {
    path: PathBuf,
}

impl MessageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MessageFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full UTF-8 message text.
    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Overwrites the message with replacement text.
    pub fn replace(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_replace_round_trip() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "fix the bug\n").expect("Should write fixture");

        let file = MessageFile::new(&path);
        assert_eq!(file.read().expect("Should read"), "fix the bug\n");

        file.replace("[AA-123] - fix the bug\n")
            .expect("Should replace");
        assert_eq!(
            fs::read_to_string(&path).expect("Should read back"),
            "[AA-123] - fix the bug\n"
        );
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let file = MessageFile::new("/nonexistent/COMMIT_EDITMSG");
        assert!(file.read().is_err());
    }
}
