//! Output formatting utilities

use crate::domain::Employee;

pub const MENU: &str = "\nEmployee Management System\n\
    1. Create an empty list\n\
    2. Add an employee\n\
    3. Check if the list is empty\n\
    4. Display all employees\n\
    5. Exit\n\
    Enter your choice: ";

pub const NO_EMPLOYEES: &str = "\nNo employee information has been entered.";
pub const LIST_CLEARED: &str = "\nAn empty list has been created.";
pub const GOODBYE: &str = "\nExiting the program. Goodbye!";
pub const INVALID_CHOICE: &str = "\nInvalid choice. Please try again.";
pub const ALLOCATION_FAILED: &str = "\nError: Memory allocation failed.";
pub const INVALID_POSITION: &str = "\nError: Invalid position for insertion.";
pub const EXPORT_FAILED: &str = "Error: Could not open file for writing.";
pub const INVALID_NAME: &str =
    "Invalid name. Please enter a valid name (alphabetic characters, spaces, hyphens are allowed).";
pub const INVALID_INTEGER: &str = "Invalid input. Please enter an integer.";

/// Message for the emptiness check
pub fn format_empty_status(is_empty: bool) -> String {
    format!("\nThe list is {}empty.", if is_empty { "" } else { "not " })
}

/// Prompt for the insertion position, naming the current end slot
pub fn format_position_prompt(end_slot: u32) -> String {
    format!(
        "Enter the position to insert the employee (1 for beginning, {} for end, or any position in between): ",
        end_slot
    )
}

/// Format one record for the on-screen listing
pub fn format_employee(employee: &Employee) -> String {
    format!(
        "\nEmployee #{}'s Information:\nID: {}\nName: {}\nSalary: {:.2}\n",
        employee.seq, employee.id, employee.name, employee.salary
    )
}

/// Format every record for the on-screen listing
pub fn format_employee_list<'a, I>(employees: I) -> String
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut output = String::new();
    for employee in employees {
        output.push_str(&format_employee(employee));
    }

    if output.is_empty() {
        return format!("{}\n", NO_EMPLOYEES);
    }
    output
}
