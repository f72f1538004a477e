//! Custom actions for the credential store.

use crate::model::Credential;

#[derive(Debug, Clone)]
pub enum CredentialAction {
    /// Checks a username/password pair against the stored credentials.
    Verify(Credential),
}

/// Results from CredentialActions - variants match 1:1 with CredentialAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialActionResult {
    Verify(bool),
}
