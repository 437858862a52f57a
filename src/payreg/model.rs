//! Record types for the two tables, plus the field validators the console
//! shell runs before a record is ever built.
//!
//! Only four fields are validated: gender, age, phone number, and attendance
//! status. Everything else (ids, names, locations, position, salary) is
//! opaque text, including the numeric-looking ones. That permissiveness is
//! part of the contract, not an oversight to fix.

use crate::error::{RegisterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = RegisterError;

    fn from_str(raw: &str) -> Result<Self> {
        match capitalize(raw.trim()).as_str() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            _ => Err(RegisterError::invalid_field(
                "gender",
                "please enter 'Male', 'Female', or 'Other'",
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Present,
    Absent,
}

impl FromStr for Status {
    type Err = RegisterError;

    fn from_str(raw: &str) -> Result<Self> {
        match capitalize(raw.trim()).as_str() {
            "Present" => Ok(Status::Present),
            "Absent" => Ok(Status::Absent),
            _ => Err(RegisterError::invalid_field(
                "status",
                "please enter 'Present' or 'Absent'",
            )),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
        };
        f.write_str(s)
    }
}

/// Age must be a bare run of decimal digits with a positive value. The
/// validated string is returned as-is; the table stores it as text.
pub fn validate_age(raw: &str) -> Result<String> {
    let all_digits = !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit());
    match raw.parse::<u64>() {
        Ok(n) if all_digits && n > 0 => Ok(raw.to_string()),
        _ => Err(RegisterError::invalid_field(
            "age",
            "please enter a valid age (positive number)",
        )),
    }
}

/// Phone numbers are exactly 10 decimal digits, kept as text so leading
/// zeros survive.
pub fn validate_phone_number(raw: &str) -> Result<String> {
    if raw.len() == 10 && raw.chars().all(|c| c.is_ascii_digit()) {
        Ok(raw.to_string())
    } else {
        Err(RegisterError::invalid_field(
            "phone number",
            "please enter exactly 10 digits",
        ))
    }
}

// str::capitalize: first char uppercased, the rest lowered.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// One row of the employee table. Serde renames match the on-disk header
/// column for column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "Employee ID")]
    pub employee_id: String,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Village")]
    pub village: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Phone Number")]
    pub phone_number: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Salary")]
    pub salary: String,
}

/// Everything but the key, for keyed updates. Combined with an existing id
/// to rebuild the full row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub gender: Gender,
    pub name: String,
    pub age: String,
    pub village: String,
    pub city: String,
    pub phone_number: String,
    pub position: String,
    pub salary: String,
}

impl EmployeeFields {
    pub fn into_record(self, employee_id: String) -> EmployeeRecord {
        EmployeeRecord {
            employee_id,
            gender: self.gender,
            name: self.name,
            age: self.age,
            village: self.village,
            city: self.city,
            phone_number: self.phone_number,
            position: self.position,
            salary: self.salary,
        }
    }
}

/// One row of the attendance table. The date is opaque `YYYY-MM-DD` text and
/// is never parsed as a calendar date; (employee_id, date) acts as the
/// logical key for upserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "Employee ID")]
    pub employee_id: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Status")]
    pub status: Status,
}
