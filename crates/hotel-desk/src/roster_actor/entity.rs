//! [`RecordEntity`] implementation for the employee roster file.
//!
//! Records are `<name> <id> <role>` lines in insertion order. Removal matches raw
//! lines by substring, so deleting "Ann" also drops "Joanna" and a line whose id or
//! role contains "Ann".

use super::error::RosterError;
use crate::model::EmployeeRecord;
use crate::storage::{FlatFile, LineRecord};
use async_trait::async_trait;
use record_actor::RecordEntity;
use std::convert::Infallible;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// The employee roster persisted to a flat file.
#[derive(Debug, Clone)]
pub struct Roster {
    file: FlatFile,
}

impl Roster {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FlatFile::new(path),
        }
    }
}

/// Parses roster lines in order.
///
/// Blank lines are skipped. Parsing stops at the first line that is not a valid
/// record; everything before it is returned.
pub fn parse_roster(lines: &[String]) -> Vec<EmployeeRecord> {
    let mut records = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match EmployeeRecord::from_line(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(line = index + 1, error = %e, "Roster unreadable past this line");
                break;
            }
        }
    }
    records
}

#[async_trait]
impl RecordEntity for Roster {
    type Record = EmployeeRecord;
    /// Name fragment; every line containing it is removed.
    type Selector = String;
    type Action = Infallible;
    type ActionResult = Infallible;
    type Error = RosterError;

    async fn on_append(&mut self, record: EmployeeRecord) -> Result<(), RosterError> {
        if record.role_kind().is_none() {
            warn!(role = %record.role, "Storing employee with unrecognised role");
        }
        let line = record.to_line()?;
        self.file.append_line(&line).await?;
        Ok(())
    }

    async fn on_list(&self) -> Result<Vec<EmployeeRecord>, RosterError> {
        match self.file.read_lines().await {
            Ok(lines) => Ok(parse_roster(&lines)),
            Err(e) => {
                warn!(error = %e, "Roster file unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn on_remove(&mut self, fragment: String) -> Result<usize, RosterError> {
        // A read fault must not fall through to a rewrite that would wipe the file.
        let lines = self.file.read_lines().await?;
        let before = lines.len();
        let survivors: Vec<String> = lines
            .into_iter()
            .filter(|line| !line.contains(fragment.as_str()))
            .collect();
        let removed = before - survivors.len();

        if removed == 0 {
            debug!(%fragment, "No roster lines matched");
            return Ok(0);
        }
        self.file.rewrite(&survivors).await?;
        info!(%fragment, removed, "Removed roster lines");
        Ok(removed)
    }

    async fn handle_action(&mut self, action: Infallible) -> Result<Infallible, RosterError> {
        match action {}
    }
}
