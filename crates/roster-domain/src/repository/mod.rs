//! Repository port - how the domain wants records persisted
//!
//! The trait here defines WHAT a data source must be able to do, not how
//! it is done. Concrete backends live in `roster-adapter`:
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼───────────────────────────────
//! trait EmployeeRepository  │  InMemoryEmployeeRepository
//!   fn find()               │  DatabaseEmployeeRepository
//!   fn store()              │  (any future backend)
//! ```

pub mod employee_repository;
