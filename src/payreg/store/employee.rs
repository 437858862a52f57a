use super::table;
use super::{DeleteOutcome, UpdateOutcome};
use crate::config::RegisterConfig;
use crate::error::Result;
use crate::model::{EmployeeFields, EmployeeRecord};
use std::fs::OpenOptions;
use std::path::PathBuf;

const TABLE: &str = "employee table";

pub const HEADER: [&str; 9] = [
    "Employee ID",
    "Gender",
    "Name",
    "Age",
    "Village",
    "City",
    "Phone Number",
    "Position",
    "Salary",
];

/// Store for the employee roster table.
///
/// The employee id is treated as an opaque key. Two inherited quirks are
/// deliberate: [`add`](Self::add) never checks for duplicate ids, and
/// [`update`](Self::update) overwrites every row matching the id with the
/// same values.
pub struct EmployeeStore {
    path: PathBuf,
}

impl EmployeeStore {
    pub fn new(config: &RegisterConfig) -> Self {
        Self {
            path: config.employee_table.clone(),
        }
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Create the table with its header if absent. Idempotent.
    pub fn initialize(&self) -> Result<()> {
        table::initialize(&self.path, &HEADER)
    }

    /// Append one record to the end of the table. No uniqueness check.
    pub fn add(&self, record: &EmployeeRecord) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.serialize(record)?;
        wtr.flush()?;
        Ok(())
    }

    /// All records in file order.
    pub fn list(&self) -> Result<Vec<EmployeeRecord>> {
        table::read_all(&self.path, TABLE)
    }

    /// Replace every row whose id matches with a record built from the new
    /// fields. The file is rewritten whether or not anything matched.
    pub fn update(&self, employee_id: &str, fields: &EmployeeFields) -> Result<UpdateOutcome> {
        let mut rows = self.list()?;
        let mut found = false;
        for row in rows.iter_mut() {
            if row.employee_id == employee_id {
                *row = fields.clone().into_record(employee_id.to_string());
                found = true;
            }
        }
        table::write_all(&self.path, &HEADER, &rows)?;
        Ok(if found {
            UpdateOutcome::Found
        } else {
            UpdateOutcome::NotFound
        })
    }

    /// Remove matching rows, asking the caller to confirm each candidate.
    /// A declined candidate is retained unchanged. Returns `Found` when any
    /// row matched the id, regardless of confirmation. The file is rewritten
    /// either way.
    pub fn delete<F>(&self, employee_id: &str, mut confirm: F) -> Result<DeleteOutcome>
    where
        F: FnMut(&EmployeeRecord) -> bool,
    {
        let rows = self.list()?;
        let mut found = false;
        let mut kept = Vec::with_capacity(rows.len());
        for row in rows {
            if row.employee_id == employee_id {
                found = true;
                if confirm(&row) {
                    continue;
                }
            }
            kept.push(row);
        }
        table::write_all(&self.path, &HEADER, &kept)?;
        Ok(if found {
            DeleteOutcome::Found
        } else {
            DeleteOutcome::NotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegisterError;
    use crate::model::Gender;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> EmployeeStore {
        EmployeeStore::with_path(dir.path().join("employee 1.csv"))
    }

    fn record(id: &str, name: &str) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: id.to_string(),
            gender: Gender::Male,
            name: name.to_string(),
            age: "30".into(),
            village: "Greenfield".into(),
            city: "Springfield".into(),
            phone_number: "0123456789".into(),
            position: "Clerk".into(),
            salary: "50000".into(),
        }
    }

    fn fields(name: &str) -> EmployeeFields {
        EmployeeFields {
            gender: Gender::Other,
            name: name.to_string(),
            age: "41".into(),
            village: "Hillside".into(),
            city: "Shelbyville".into(),
            phone_number: "9876543210".into(),
            position: "Manager".into(),
            salary: "70000".into(),
        }
    }

    #[test]
    fn initialize_creates_header_only_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        let content = fs::read_to_string(dir.path().join("employee 1.csv")).unwrap();
        assert_eq!(
            content,
            "Employee ID,Gender,Name,Age,Village,City,Phone Number,Position,Salary\n"
        );
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.add(&record("E1", "Alice")).unwrap();

        let before = fs::read_to_string(dir.path().join("employee 1.csv")).unwrap();
        store.initialize().unwrap();
        let after = fs::read_to_string(dir.path().join("employee 1.csv")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn add_then_list_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.add(&record("E1", "Alice")).unwrap();
        store.add(&record("E2", "Bob")).unwrap();

        let rows = store.list().unwrap();
        assert_eq!(rows, vec![record("E1", "Alice"), record("E2", "Bob")]);
    }

    #[test]
    fn add_permits_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.add(&record("E1", "Alice")).unwrap();
        store.add(&record("E1", "Alias")).unwrap();

        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn add_without_table_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let err = store.add(&record("E1", "Alice")).unwrap_err();
        assert!(matches!(err, RegisterError::Io(_)));
    }

    #[test]
    fn update_rewrites_every_matching_row() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.add(&record("E1", "Alice")).unwrap();
        store.add(&record("E2", "Bob")).unwrap();
        store.add(&record("E1", "Alias")).unwrap();

        let outcome = store.update("E1", &fields("Updated")).unwrap();
        assert_eq!(outcome, UpdateOutcome::Found);

        let rows = store.list().unwrap();
        let expected = fields("Updated").into_record("E1".into());
        assert_eq!(rows[0], expected);
        assert_eq!(rows[2], expected);
        assert_eq!(rows[1], record("E2", "Bob"));
    }

    #[test]
    fn update_missing_id_reports_not_found_and_keeps_rows() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.add(&record("E1", "Alice")).unwrap();

        let outcome = store.update("NOPE", &fields("Updated")).unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(store.list().unwrap(), vec![record("E1", "Alice")]);
    }

    #[test]
    fn delete_declined_keeps_record_but_reports_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.add(&record("E2", "Bob")).unwrap();

        let before = store.list().unwrap();
        let outcome = store.delete("E2", |_| false).unwrap();
        assert_eq!(outcome, DeleteOutcome::Found);
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn delete_confirms_each_candidate_independently() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.add(&record("E1", "Alice")).unwrap();
        store.add(&record("E1", "Alias")).unwrap();

        // Confirm only the first candidate.
        let mut seen = 0;
        let outcome = store
            .delete("E1", |_| {
                seen += 1;
                seen == 1
            })
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Found);
        assert_eq!(seen, 2);
        assert_eq!(store.list().unwrap(), vec![record("E1", "Alias")]);
    }

    #[test]
    fn delete_missing_id_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.add(&record("E1", "Alice")).unwrap();

        let outcome = store.delete("NOPE", |_| true).unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(store.list().unwrap(), vec![record("E1", "Alice")]);
    }

    #[test]
    fn list_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let err = store.list().unwrap_err();
        assert!(matches!(err, RegisterError::Io(_)));
    }

    #[test]
    fn list_reports_short_row_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employee 1.csv");
        fs::write(
            &path,
            "Employee ID,Gender,Name,Age,Village,City,Phone Number,Position,Salary\nE1,Male,Alice\n",
        )
        .unwrap();

        let store = EmployeeStore::with_path(path);
        let err = store.list().unwrap_err();
        assert!(matches!(err, RegisterError::Corrupt { .. }));
    }
}
