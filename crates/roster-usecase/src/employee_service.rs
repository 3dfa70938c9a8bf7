//! Employee Service - fixed capability surface over a pluggable repository
//!
//! Callers (HTTP handlers, CLI commands, tests) depend on this type, never
//! on a concrete repository. Swapping the data source is a one-line change
//! in the composition root.

use std::sync::Arc;

use roster_domain::model::employee::{Employee, EmployeeId};
use roster_domain::repository::employee_repository::{EmployeeRepository, RepositoryError};

/// Thin orchestration layer over the active [`EmployeeRepository`].
///
/// Each operation forwards verbatim to the repository the service was
/// constructed with and propagates whatever it returns or raises. The
/// service holds exactly one repository for its entire lifetime.
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Wire the service to a concrete repository.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    pub async fn find(&self, id: EmployeeId) -> Result<Employee, RepositoryError> {
        self.repository.find(id).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Employee>, RepositoryError> {
        self.repository.search(query).await
    }

    pub async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        self.repository.find_all().await
    }

    pub async fn store(&self, employee: &Employee) -> Result<EmployeeId, RepositoryError> {
        self.repository.store(employee).await
    }

    pub async fn delete(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        self.repository.delete(id).await
    }
}
