//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staffroll")]
#[command(about = "Interactive employee record manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with export_path, max_records and name_max_len settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report file written on exit (default: employees_information.txt)
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}
