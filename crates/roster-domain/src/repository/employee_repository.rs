//! Employee Repository - abstract persistence for Employees
//!
//! The port every data source plugs into. The service layer talks only to
//! this trait, so swapping the physical backend never touches callers.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::employee::{Employee, EmployeeId, ValidationError};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No employee has the requested id.
    #[error("employee {id} not found")]
    NotFound { id: EmployeeId },

    /// A record failed validation while being persisted or reconstructed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing store rejected the operation. Adapter-specific failures
    /// (I/O, network, locking) are reported here, never swallowed.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// The backend does not implement this operation.
    #[error("operation '{operation}' is not supported by this backend")]
    Unsupported { operation: &'static str },
}

/// Employee Repository trait.
///
/// Absence semantics are part of the contract: `find` on a missing id is
/// an error, `delete` on a missing id is `Ok(false)`, and `search` with no
/// matches is an empty `Vec`. Any caller-supplied id on `store` is ignored.
///
/// Every operation may suspend while the backing store is reached; the
/// in-memory implementation completes without suspending. Nothing here
/// serializes concurrent callers - an implementation running under true
/// parallelism must guard its collection itself to keep ids unique.
///
/// No retries happen at this level. Retry policy, if any, belongs to an
/// adapter or to the transport layer.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch the employee with this id.
    async fn find(&self, id: EmployeeId) -> Result<Employee, RepositoryError>;

    /// All employees whose full name, role, or department contains `query`
    /// (case-insensitive), in insertion order.
    async fn search(&self, query: &str) -> Result<Vec<Employee>, RepositoryError>;

    /// Every stored employee, in insertion order.
    ///
    /// The returned `Vec` is the caller's to mutate; it never aliases the
    /// underlying collection.
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Persist a new employee under the next unused id and return that id.
    async fn store(&self, employee: &Employee) -> Result<EmployeeId, RepositoryError>;

    /// Remove the employee with this id. Returns whether anything was
    /// removed; a missing id is not an error.
    async fn delete(&self, id: EmployeeId) -> Result<bool, RepositoryError>;

    /// Whether an employee with this id exists.
    async fn exists(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        match self.find(id).await {
            Ok(_) => Ok(true),
            Err(RepositoryError::NotFound { .. }) => Ok(false),
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal implementation to exercise the trait's default methods.
    struct SingleEmployeeRepo {
        employee: Employee,
        fail: bool,
    }

    #[async_trait]
    impl EmployeeRepository for SingleEmployeeRepo {
        async fn find(&self, id: EmployeeId) -> Result<Employee, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Backend {
                    message: "store offline".to_string(),
                });
            }
            if id == self.employee.id() {
                Ok(self.employee.clone())
            } else {
                Err(RepositoryError::NotFound { id })
            }
        }

        async fn search(&self, _query: &str) -> Result<Vec<Employee>, RepositoryError> {
            Ok(vec![self.employee.clone()])
        }

        async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
            Ok(vec![self.employee.clone()])
        }

        async fn store(&self, _employee: &Employee) -> Result<EmployeeId, RepositoryError> {
            Err(RepositoryError::Unsupported { operation: "store" })
        }

        async fn delete(&self, _id: EmployeeId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    fn repo(fail: bool) -> SingleEmployeeRepo {
        SingleEmployeeRepo {
            employee: Employee::new(
                EmployeeId::new(1),
                "Ana Lima",
                "Técnica",
                "Manutenção",
                "ana@exemplo.com",
            )
            .unwrap(),
            fail,
        }
    }

    #[tokio::test]
    async fn test_exists_reports_presence() {
        let repo = repo(false);

        assert!(repo.exists(EmployeeId::new(1)).await.unwrap());
        assert!(!repo.exists(EmployeeId::new(99)).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_propagates_backend_errors() {
        let repo = repo(true);

        let result = repo.exists(EmployeeId::new(1)).await;
        assert!(matches!(result, Err(RepositoryError::Backend { .. })));
    }
}
