use crate::storage::{LineRecord, RecordFormatError};
use std::fmt;

/// A manager's sign-in pair, stored as `<username> <password>`.
///
/// Usernames are not unique; lookups take the first exact match in storage order.
/// The password is kept in plain text, but `Debug` output redacts it so credentials
/// never reach the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LineRecord for Credential {
    const FIELDS: &'static [&'static str] = &["username", "password"];

    fn to_fields(&self) -> Vec<String> {
        vec![self.username.clone(), self.password.clone()]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordFormatError> {
        match fields {
            [username, password] => Ok(Self::new(*username, *password)),
            _ => Err(RecordFormatError::FieldCount {
                expected: Self::FIELDS.len(),
                found: fields.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential::new("mgr", "pw123");
        let debug = format!("{credential:?}");
        assert!(debug.contains("mgr"));
        assert!(!debug.contains("pw123"));
    }

    #[test]
    fn test_line_format() {
        let credential = Credential::new("mgr", "pw123");
        assert_eq!(credential.to_line().unwrap(), "mgr pw123");
        assert_eq!(Credential::from_line("mgr pw123").unwrap(), credential);
        assert!(Credential::from_line("mgr").is_err());
    }

    #[test]
    fn test_matches_requires_both_fields() {
        let credential = Credential::new("mgr", "pw123");
        assert!(credential.matches("mgr", "pw123"));
        assert!(!credential.matches("mgr", "wrong"));
        assert!(!credential.matches("other", "pw123"));
    }
}
