use clap::Parser;
use colored::*;
use payreg::config::RegisterConfig;
use payreg::error::Result;
use payreg::model::{EmployeeRecord, Status};
use payreg::store::attendance::AttendanceStore;
use payreg::store::employee::EmployeeStore;
use payreg::store::{DeleteOutcome, UpdateOutcome, UpsertOutcome};

mod args;
mod prompt;
mod render;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.data_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            RegisterConfig::in_dir(dir)
        }
        None => RegisterConfig::default(),
    };

    let employees = EmployeeStore::new(&config);
    let attendance = AttendanceStore::new(&config);
    employees.initialize()?;
    attendance.initialize()?;

    loop {
        print_menu();
        let choice = prompt::read_line("Enter your choice: ")?;

        let outcome = match choice.trim() {
            "1" => handle_add_employee(&employees),
            "2" => handle_view_employees(&employees),
            "3" => handle_update_employee(&employees),
            "4" => handle_delete_employee(&employees),
            "5" => handle_mark_attendance(&attendance),
            "6" => handle_view_attendance(&attendance),
            "7" => handle_delete_attendance(&attendance),
            "8" => {
                println!("Exiting the system.");
                return Ok(());
            }
            _ => {
                println!("{}", "Invalid choice. Please try again.".red());
                Ok(())
            }
        };

        // Store failures abort the action, not the session.
        if let Err(e) = outcome {
            println!("{}", e.to_string().red());
        }
    }
}

fn print_menu() {
    println!("\nEmployee Payroll System");
    println!("1. Add Employee");
    println!("2. View Employees");
    println!("3. Update Employee");
    println!("4. Delete Employee");
    println!("5. Mark Attendance");
    println!("6. View Attendance");
    println!("7. Delete Attendance");
    println!("8. Exit");
}

fn handle_add_employee(store: &EmployeeStore) -> Result<()> {
    let employee_id = prompt::read_line("Enter Employee ID: ")?;
    let fields = prompt::employee_fields(false)?;
    let record: EmployeeRecord = fields.into_record(employee_id);
    store.add(&record)?;
    println!("{}", "Employee added successfully.".green());
    Ok(())
}

fn handle_view_employees(store: &EmployeeStore) -> Result<()> {
    let rows = store.list()?;
    render::employee_table(&rows);
    Ok(())
}

fn handle_update_employee(store: &EmployeeStore) -> Result<()> {
    let employee_id = prompt::read_line("Enter Employee ID to update: ")?;
    println!("Updating details for Employee ID: {}", employee_id);
    let fields = prompt::employee_fields(true)?;
    match store.update(&employee_id, &fields)? {
        UpdateOutcome::Found => println!("{}", "Employee updated successfully.".green()),
        UpdateOutcome::NotFound => println!("Employee ID not found."),
    }
    Ok(())
}

fn handle_delete_employee(store: &EmployeeStore) -> Result<()> {
    let employee_id = prompt::read_line("Enter Employee ID to delete: ")?;
    let outcome = store.delete(&employee_id, |row| {
        println!("Employee found: {} (ID: {})", row.name, row.employee_id);
        // A failed read counts as a declined confirmation.
        let confirmed = prompt::read_line("Are you sure you want to delete this employee? (yes/no): ")
            .map(|s| s.trim().eq_ignore_ascii_case("yes"))
            .unwrap_or(false);
        if confirmed {
            println!("{}", "Employee deleted successfully.".green());
        }
        confirmed
    })?;
    if outcome == DeleteOutcome::NotFound {
        println!("Employee ID not found.");
    }
    Ok(())
}

fn handle_mark_attendance(store: &AttendanceStore) -> Result<()> {
    let employee_id = prompt::read_line("Enter Employee ID to mark attendance: ")?;
    let raw_status = prompt::read_line("Enter attendance status (Present/Absent): ")?;
    let date = prompt::read_line("Enter the date (YYYY-MM-DD): ")?;

    // Unlike the roster prompts, an invalid status aborts back to the menu.
    let status: Status = match raw_status.parse() {
        Ok(status) => status,
        Err(e) => {
            println!("{}", e.to_string().red());
            return Ok(());
        }
    };

    match store.upsert(&employee_id, &date, status)? {
        UpsertOutcome::Inserted => println!("{}", "New attendance record added.".green()),
        UpsertOutcome::Updated => {
            println!("{}", "Attendance status updated successfully.".green())
        }
        UpsertOutcome::Unchanged => println!("Attendance already marked as {}", status),
    }
    Ok(())
}

fn handle_view_attendance(store: &AttendanceStore) -> Result<()> {
    let rows = store.list()?;
    render::attendance_lines(&rows);
    Ok(())
}

fn handle_delete_attendance(store: &AttendanceStore) -> Result<()> {
    let employee_id = prompt::read_line("Enter Employee ID to delete attendance: ")?;
    let date = prompt::read_line("Enter the date (YYYY-MM-DD) of the attendance record to delete: ")?;
    match store.delete(&employee_id, &date)? {
        DeleteOutcome::Found => println!("{}", "Attendance record deleted successfully.".green()),
        DeleteOutcome::NotFound => println!("Attendance record not found."),
    }
    Ok(())
}
