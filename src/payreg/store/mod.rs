//! # Storage Layer
//!
//! Each table lives in one CSV file with a fixed header row, owned
//! exclusively by its store. Every mutating operation runs the same cycle:
//! read the whole file into memory, transform the record sequence, rewrite
//! the file. There is no shared in-memory state between operations; the file
//! on disk is the sole source of truth between calls.
//!
//! ## Implementations
//!
//! - [`employee::EmployeeStore`]: the 9-column employee roster
//! - [`attendance::AttendanceStore`]: per-day attendance marks keyed by
//!   (employee id, date)
//!
//! Shared file plumbing (header-only initialization, read-all, rewrite-all)
//! lives in the private `table` module. Rewrites go through a sibling temp
//! file and a rename, so a completed operation leaves either the old or the
//! new contents on disk.
//!
//! Keyed lookups report their outcome as a value rather than an error;
//! "not found" is an ordinary result the shell relays to the operator.

pub mod attendance;
pub mod employee;
mod table;

/// Outcome of a keyed update: did any row match the id?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Found,
    NotFound,
}

/// Outcome of a keyed delete. `Found` means at least one row matched,
/// whether or not its removal was ultimately confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Found,
    NotFound,
}

/// Outcome of an attendance upsert. `Unchanged` means the record already
/// carried the requested status and the file was not touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged,
}
