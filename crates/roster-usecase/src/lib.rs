//! # Roster Use Case Layer
//!
//! Application-facing operations over the employee roster. The service
//! here fixes the capability surface callers see; which data source backs
//! it is decided once, at composition time.

pub mod employee_service;

pub use employee_service::EmployeeService;
