use std::path::{Path, PathBuf};

use eyre::Result;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// An existing file was replaced
    Replaced,
}

/// A generated file waiting to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Generated classes are always overwritten.
    pub fn write(&self) -> Result<WriteResult> {
        let existed = self.exists();
        write_file(&self.path, &self.content)?;
        Ok(if existed {
            WriteResult::Replaced
        } else {
            WriteResult::Created
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("person.js");

        write_file(&path, "class Person {}").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Person {}");
    }

    #[test]
    fn test_file_write_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("person.js");

        let file = File::new(&path, "module.exports = Person;\n");
        assert!(!file.exists());

        assert_eq!(file.write().unwrap(), WriteResult::Created);
        assert!(file.exists());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "module.exports = Person;\n"
        );
    }

    #[test]
    fn test_file_write_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("person.js");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        assert_eq!(file.write().unwrap(), WriteResult::Replaced);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }
}
