//! Display formatting for the two tables: a fixed-width roster grid and
//! one-line-per-record attendance output.

use payreg::model::{AttendanceRecord, EmployeeRecord};
use payreg::store::employee::HEADER;

pub fn employee_table(rows: &[EmployeeRecord]) {
    println!(
        "{:<15} {:<10} {:<20} {:<5} {:<15} {:<15} {:<15} {:<15} {:<10}",
        HEADER[0],
        HEADER[1],
        HEADER[2],
        HEADER[3],
        HEADER[4],
        HEADER[5],
        HEADER[6],
        HEADER[7],
        HEADER[8]
    );
    for r in rows {
        println!(
            "{:<15} {:<10} {:<20} {:<5} {:<15} {:<15} {:<15} {:<15} {:<10}",
            r.employee_id,
            r.gender.to_string(),
            r.name,
            r.age,
            r.village,
            r.city,
            r.phone_number,
            r.position,
            r.salary
        );
    }
}

pub fn attendance_lines(rows: &[AttendanceRecord]) {
    for r in rows {
        println!(
            "Employee ID: {}, Date: {}, Status: {}",
            r.employee_id, r.date, r.status
        );
    }
}
