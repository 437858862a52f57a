//! Shared table-file plumbing: header-only initialization, read-all,
//! rewrite-all. Both stores funnel through these so the file handling is
//! identical for every table.

use crate::error::{RegisterError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Create the file with only its header row if it does not exist yet.
/// Idempotent: an existing file is left untouched, whatever it contains.
pub(crate) fn initialize(path: &Path, header: &[&str]) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(header)?;
    wtr.flush()?;
    Ok(())
}

/// Materialize every record in file order. A missing file is an IO error;
/// a row that fails to decode (wrong column count, unknown enum value) is
/// reported as a corrupt record with its line number.
pub(crate) fn read_all<R: DeserializeOwned>(path: &Path, table: &'static str) -> Result<Vec<R>> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row.map_err(|e| corrupt(table, e))?);
    }
    Ok(rows)
}

/// Replace the file's contents with the header plus the given rows. The new
/// contents are written to a sibling temp file and renamed over the
/// original, so an interrupted rewrite never leaves a half-written table.
pub(crate) fn write_all<R: Serialize>(path: &Path, header: &[&str], rows: &[R]) -> Result<()> {
    let tmp = tmp_path(path);
    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)?;
        wtr.write_record(header)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn corrupt(table: &'static str, err: csv::Error) -> RegisterError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    RegisterError::Corrupt {
        table,
        line,
        message: err.to_string(),
    }
}
