//! # Roster Domain Layer
//!
//! Business types for the employee roster: the [`Employee`] entity and the
//! repository port every data source must satisfy.
//!
//! ## Architecture
//!
//! ```text
//! caller ──▶ EmployeeService ──▶ EmployeeRepository (port, this crate)
//!                                      │
//!                                      ├── InMemoryEmployeeRepository
//!                                      └── DatabaseEmployeeRepository
//!                                          (adapters, roster-adapter)
//! ```
//!
//! This crate knows nothing about HTTP, databases, or process wiring.
//! Swapping the physical data source must never require a change here.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::employee::{Employee, EmployeeId, ValidationError};
pub use repository::employee_repository::{EmployeeRepository, RepositoryError};
