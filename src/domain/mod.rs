//! Domain layer - Employee records and the record store

pub mod employee;
pub mod store;

pub use employee::{Employee, EmployeeName};
pub use store::RecordStore;
