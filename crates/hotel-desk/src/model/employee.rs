use crate::storage::{parse_number, LineRecord, RecordFormatError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The jobs the front desk hires for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Chef,
    Receptionist,
    Housekeeping,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Chef, Role::Receptionist, Role::Housekeeping];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Chef => "Chef",
            Role::Receptionist => "Receptionist",
            Role::Housekeeping => "Housekeeping",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// One roster line: `<name> <id> <role>`.
///
/// Neither the name nor the id is unique. The role is kept as the text that was
/// entered; [`EmployeeRecord::role_kind`] interprets it when it names a known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub id: i64,
    pub role: String,
}

impl EmployeeRecord {
    pub fn new(name: impl Into<String>, id: i64, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            role: role.into(),
        }
    }

    pub fn role_kind(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, ID: {}, Role: {}", self.name, self.id, self.role)
    }
}

impl LineRecord for EmployeeRecord {
    const FIELDS: &'static [&'static str] = &["name", "id", "role"];

    fn to_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.id.to_string(), self.role.clone()]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordFormatError> {
        match fields {
            [name, id, role] => Ok(Self::new(*name, parse_number("id", id)?, *role)),
            _ => Err(RecordFormatError::FieldCount {
                expected: Self::FIELDS.len(),
                found: fields.len(),
            }),
        }
    }
}
