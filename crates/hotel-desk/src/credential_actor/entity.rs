//! [`RecordEntity`] implementation for the manager credential file.
//!
//! The file holds one `<username> <password>` line per registration, in
//! registration order. Duplicates are kept; verification takes the first exact match.

use super::actions::{CredentialAction, CredentialActionResult};
use super::error::CredentialError;
use crate::model::Credential;
use crate::storage::{FlatFile, LineRecord};
use async_trait::async_trait;
use record_actor::RecordEntity;
use std::convert::Infallible;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Manager credentials persisted to a flat file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    file: FlatFile,
}

impl CredentialStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FlatFile::new(path),
        }
    }

    /// Every well-formed credential in file order.
    ///
    /// An unreadable file reads as empty, so a broken store denies every login
    /// rather than failing the session.
    async fn load(&self) -> Vec<Credential> {
        let lines = match self.file.read_lines().await {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "Credential file unreadable, treating as empty");
                return Vec::new();
            }
        };

        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match Credential::from_line(line) {
                Ok(credential) => Some(credential),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "Skipping malformed credential");
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl RecordEntity for CredentialStore {
    type Record = Credential;
    type Selector = Infallible;
    type Action = CredentialAction;
    type ActionResult = CredentialActionResult;
    type Error = CredentialError;

    async fn on_append(&mut self, record: Credential) -> Result<(), CredentialError> {
        let line = record.to_line()?;
        self.file.append_line(&line).await?;
        Ok(())
    }

    async fn on_list(&self) -> Result<Vec<Credential>, CredentialError> {
        Ok(self.load().await)
    }

    async fn on_remove(&mut self, selector: Infallible) -> Result<usize, CredentialError> {
        match selector {}
    }

    async fn handle_action(
        &mut self,
        action: CredentialAction,
    ) -> Result<CredentialActionResult, CredentialError> {
        match action {
            CredentialAction::Verify(attempt) => {
                let verified = self
                    .load()
                    .await
                    .iter()
                    .any(|stored| stored.matches(&attempt.username, &attempt.password));
                debug!(username = %attempt.username, verified, "Verify");
                Ok(CredentialActionResult::Verify(verified))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn verify(store: &mut CredentialStore, username: &str, password: &str) -> bool {
        match store
            .handle_action(CredentialAction::Verify(Credential::new(username, password)))
            .await
            .unwrap()
        {
            CredentialActionResult::Verify(verified) => verified,
        }
    }

    #[tokio::test]
    async fn test_registered_credentials_verify() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(dir.path().join("managers.txt"));

        store.on_append(Credential::new("mgr", "pw123")).await.unwrap();

        assert!(verify(&mut store, "mgr", "pw123").await);
        assert!(!verify(&mut store, "mgr", "wrong").await);
        assert!(!verify(&mut store, "nobody", "pw123").await);
    }

    #[tokio::test]
    async fn test_missing_file_denies_everyone() {
        let dir = tempdir().unwrap();
        let mut store = CredentialStore::open(dir.path().join("managers.txt"));

        assert!(!verify(&mut store, "mgr", "pw123").await);
        assert!(store.on_list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_file_denies_everyone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("managers.txt");
        std::fs::create_dir(&path).unwrap();
        let mut store = CredentialStore::open(&path);

        assert!(!verify(&mut store, "mgr", "pw123").await);
        assert!(store.on_list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_all_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("managers.txt");
        let mut store = CredentialStore::open(&path);

        store.on_append(Credential::new("a", "1")).await.unwrap();
        store.on_append(Credential::new("a", "2")).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a 1\na 2\n");
        assert!(verify(&mut store, "a", "1").await);
        assert!(verify(&mut store, "a", "2").await);
    }

    #[tokio::test]
    async fn test_unstorable_credentials_are_refused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("managers.txt");
        let mut store = CredentialStore::open(&path);

        let err = store
            .on_append(Credential::new("two words", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, CredentialError::Format(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_malformed_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("managers.txt");
        std::fs::write(&path, "lonely\nmgr pw123\n\nx y z\n").unwrap();
        let mut store = CredentialStore::open(&path);

        assert_eq!(store.on_list().await.unwrap(), vec![Credential::new("mgr", "pw123")]);
        assert!(verify(&mut store, "mgr", "pw123").await);
    }
}
