//! # Roster Adapter Layer
//!
//! Concrete data sources behind the repository port from `roster-domain`:
//!
//! - `repository::in_memory` - reference implementation, owns its collection
//! - `repository::database` - placeholder for an external database backend

pub mod repository;
