//! staffroll - Interactive employee record manager
//!
//! Keeps an ordered list of employee records in memory, driven by a text
//! menu, and writes a plain-text report of every record on exit.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::StaffrollError;
