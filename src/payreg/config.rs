use std::path::{Path, PathBuf};

// Historical filenames, space included, kept for drop-in compatibility with
// existing data files.
const EMPLOYEE_TABLE: &str = "employee 1.csv";
const ATTENDANCE_TABLE: &str = "employee_attendance.csv";

/// Where the two table files live. Constructed once and handed to each store,
/// so tests can point a register at a temporary directory instead of the
/// process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterConfig {
    pub employee_table: PathBuf,
    pub attendance_table: PathBuf,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            employee_table: PathBuf::from(EMPLOYEE_TABLE),
            attendance_table: PathBuf::from(ATTENDANCE_TABLE),
        }
    }
}

impl RegisterConfig {
    /// Place both tables under the given directory, default filenames.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            employee_table: dir.join(EMPLOYEE_TABLE),
            attendance_table: dir.join(ATTENDANCE_TABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_working_directory_filenames() {
        let config = RegisterConfig::default();
        assert_eq!(config.employee_table, PathBuf::from("employee 1.csv"));
        assert_eq!(
            config.attendance_table,
            PathBuf::from("employee_attendance.csv")
        );
    }

    #[test]
    fn in_dir_prefixes_both_tables() {
        let config = RegisterConfig::in_dir("/tmp/payreg");
        assert_eq!(
            config.employee_table,
            PathBuf::from("/tmp/payreg/employee 1.csv")
        );
        assert_eq!(
            config.attendance_table,
            PathBuf::from("/tmp/payreg/employee_attendance.csv")
        );
    }
}
