use super::table;
use super::{DeleteOutcome, UpsertOutcome};
use crate::config::RegisterConfig;
use crate::error::Result;
use crate::model::{AttendanceRecord, Status};
use std::path::PathBuf;

const TABLE: &str = "attendance table";

pub const HEADER: [&str; 3] = ["Employee ID", "Date", "Status"];

/// Store for per-day attendance marks.
///
/// (employee id, date) is the logical key. The employee id is never checked
/// against the employee table, and unlike employee deletion, removing an
/// attendance record takes no confirmation step.
pub struct AttendanceStore {
    path: PathBuf,
}

impl AttendanceStore {
    pub fn new(config: &RegisterConfig) -> Self {
        Self {
            path: config.attendance_table.clone(),
        }
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Create the table with its header if absent. Idempotent.
    pub fn initialize(&self) -> Result<()> {
        table::initialize(&self.path, &HEADER)
    }

    /// Insert, update in place, or leave alone, keyed by (id, date).
    /// A missing file is treated as an empty table. `Unchanged` skips the
    /// rewrite entirely.
    pub fn upsert(&self, employee_id: &str, date: &str, status: Status) -> Result<UpsertOutcome> {
        let mut rows: Vec<AttendanceRecord> = if self.path.exists() {
            table::read_all(&self.path, TABLE)?
        } else {
            Vec::new()
        };

        let existing = rows
            .iter()
            .position(|r| r.employee_id == employee_id && r.date == date);
        let outcome = match existing {
            Some(i) if rows[i].status == status => return Ok(UpsertOutcome::Unchanged),
            Some(i) => {
                rows[i].status = status;
                UpsertOutcome::Updated
            }
            None => {
                rows.push(AttendanceRecord {
                    employee_id: employee_id.to_string(),
                    date: date.to_string(),
                    status,
                });
                UpsertOutcome::Inserted
            }
        };

        table::write_all(&self.path, &HEADER, &rows)?;
        Ok(outcome)
    }

    /// All records in file order.
    pub fn list(&self) -> Result<Vec<AttendanceRecord>> {
        table::read_all(&self.path, TABLE)
    }

    /// Remove every record matching the exact (id, date) pair, without
    /// confirmation. The file is rewritten even when nothing matched.
    pub fn delete(&self, employee_id: &str, date: &str) -> Result<DeleteOutcome> {
        let rows = self.list()?;
        let before = rows.len();
        let kept: Vec<AttendanceRecord> = rows
            .into_iter()
            .filter(|r| !(r.employee_id == employee_id && r.date == date))
            .collect();
        let found = kept.len() != before;

        table::write_all(&self.path, &HEADER, &kept)?;
        Ok(if found {
            DeleteOutcome::Found
        } else {
            DeleteOutcome::NotFound
        })
    }
}
