//! Plain-text files holding one record per line.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// I/O faults on a backing file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A line-oriented text file.
///
/// A file that does not exist yet reads as empty; it is created on the first write.
#[derive(Debug, Clone)]
pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line, without line terminators.
    pub async fn read_lines(&self) -> Result<Vec<String>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents.lines().map(str::to_owned).collect()),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "File absent, reading as empty");
                Ok(Vec::new())
            }
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Appends one newline-terminated line.
    pub async fn append_line(&self, line: &str) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|source| self.write_error(source))?;
        file.write_all(format!("{line}\n").as_bytes())
            .await
            .map_err(|source| self.write_error(source))?;
        file.flush().await.map_err(|source| self.write_error(source))
    }

    /// Replaces the whole file with `lines`, each newline-terminated.
    pub async fn rewrite(&self, lines: &[String]) -> Result<(), StorageError> {
        let contents: String = lines.iter().map(|line| format!("{line}\n")).collect();
        fs::write(&self.path, contents)
            .await
            .map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = FlatFile::new(dir.path().join("absent.txt"));

        assert!(file.read_lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_creates_then_extends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = FlatFile::new(dir.path().join("log.txt"));

        file.append_line("first").await.unwrap();
        file.append_line("second").await.unwrap();

        assert_eq!(file.read_lines().await.unwrap(), vec!["first", "second"]);
        let raw = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(raw, "first\nsecond\n");
    }

    #[tokio::test]
    async fn test_rewrite_replaces_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = FlatFile::new(dir.path().join("list.txt"));
        file.append_line("old").await.unwrap();

        file.rewrite(&["a".to_string(), "b".to_string()]).await.unwrap();
        assert_eq!(file.read_lines().await.unwrap(), vec!["a", "b"]);

        file.rewrite(&[]).await.unwrap();
        assert!(file.read_lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory cannot be read as a text file.
        let file = FlatFile::new(dir.path());

        let err = file.read_lines().await.unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }
}
