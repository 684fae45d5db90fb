use assert_cmd::Command;

pub fn staffroll_cmd() -> Command {
    let mut cmd = Command::cargo_bin("staffroll").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Menu input that adds one employee
pub fn add(id: i64, name: &str, salary: i64, position: i64) -> String {
    format!("2\n{}\n{}\n{}\n{}\n", id, name, salary, position)
}
