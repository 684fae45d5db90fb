//! Plain-text report written on exit

use crate::domain::Employee;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Format one record as a report block, trailing blank line included
pub fn format_report_block(employee: &Employee) -> String {
    format!(
        "Employee #{}'s Information\nID: {}\nName: {}\nSalary: {:.2}\n\n",
        employee.seq, employee.id, employee.name, employee.salary
    )
}

/// Write every record to `out` in iteration order
pub fn write_report<'a, W, I>(out: &mut W, employees: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Employee>,
{
    let mut written = 0;
    for employee in employees {
        out.write_all(format_report_block(employee).as_bytes())?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Truncate `path` and rewrite it with the full report.
///
/// Returns the number of records written.
pub fn export_report<'a, I>(path: &Path, employees: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let written = write_report(&mut out, employees)?;
    tracing::debug!(path = %path.display(), written, "exported report");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeName, RecordStore};
    use crate::error::StaffrollError;
    use std::fs;
    use tempfile::TempDir;

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        for (id, name, salary, position) in [
            (1, "Alice", 1000.0, 1),
            (2, "Bob", 2000.0, 1),
            (3, "Carol", 1500.0, 2),
        ] {
            let name = EmployeeName::parse(name, 24).unwrap();
            store.insert(id, name, salary, position).unwrap();
        }
        store
    }

    #[test]
    fn test_format_report_block() {
        let employee = Employee {
            seq: 3,
            id: 3,
            name: EmployeeName::parse("Carol", 24).unwrap(),
            salary: 1500.0,
        };
        assert_eq!(
            format_report_block(&employee),
            "Employee #3's Information\nID: 3\nName: Carol\nSalary: 1500.00\n\n"
        );
    }

    #[test]
    fn test_salary_rounds_to_two_places() {
        let employee = Employee {
            seq: 1,
            id: 1,
            name: EmployeeName::parse("Al", 24).unwrap(),
            salary: 1234.567,
        };
        assert!(format_report_block(&employee).contains("Salary: 1234.57\n"));
    }

    #[test]
    fn test_export_writes_head_to_tail() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("employees_information.txt");

        let written = export_report(&path, &sample_store()).unwrap();
        assert_eq!(written, 3);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Employee #2's Information\nID: 2\nName: Bob\nSalary: 2000.00\n\n\
             Employee #3's Information\nID: 3\nName: Carol\nSalary: 1500.00\n\n\
             Employee #1's Information\nID: 1\nName: Alice\nSalary: 1000.00\n\n"
        );
    }

    #[test]
    fn test_export_truncates_previous_report() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.txt");
        fs::write(&path, "stale contents from an earlier run\n").unwrap();

        export_report(&path, &RecordStore::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("report.txt");

        let result = export_report(&path, &sample_store());
        assert!(matches!(result, Err(StaffrollError::Io(_))));
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buffer = Vec::new();
        let written = write_report(&mut buffer, &RecordStore::new()).unwrap();
        assert_eq!(written, 0);
        assert!(buffer.is_empty());
    }
}
