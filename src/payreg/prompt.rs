//! Console input collection: a line reader plus the retry-until-valid field
//! prompts. Validation failures are reported and the same field is asked
//! again; only a read failure (e.g. end of input) escapes as an error.

use colored::*;
use payreg::model::{self, EmployeeFields, Gender};
use std::io::{self, BufRead, Write};

pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn gender() -> io::Result<Gender> {
    loop {
        let raw = read_line("Enter Employee Gender (Male/Female/Other): ")?;
        match raw.parse() {
            Ok(g) => return Ok(g),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

pub fn age() -> io::Result<String> {
    loop {
        let raw = read_line("Enter Employee Age: ")?;
        match model::validate_age(&raw) {
            Ok(age) => return Ok(age),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

pub fn phone_number() -> io::Result<String> {
    loop {
        let raw = read_line("Enter Employee Phone Number (10 digits): ")?;
        match model::validate_phone_number(&raw) {
            Ok(phone) => return Ok(phone),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

/// Collect the 8 non-key employee fields, in table column order.
pub fn employee_fields(updating: bool) -> io::Result<EmployeeFields> {
    let qualifier = if updating { "new " } else { "" };
    let gender = gender()?;
    let name = read_line(&format!("Enter {}Employee Name: ", qualifier))?;
    let age = age()?;
    let village = read_line(&format!("Enter {}Village: ", qualifier))?;
    let city = read_line(&format!("Enter {}City: ", qualifier))?;
    let phone_number = phone_number()?;
    let position = read_line(&format!("Enter {}Employee Position: ", qualifier))?;
    let salary = read_line(&format!("Enter {}Employee Salary: ", qualifier))?;
    Ok(EmployeeFields {
        gender,
        name,
        age,
        village,
        city,
        phone_number,
        position,
        salary,
    })
}
