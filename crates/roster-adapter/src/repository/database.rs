//! Database-backed Employee Repository (placeholder)
//!
//! Wiring target for a future external database. Only `find_all` answers
//! today, with a canned result set; every other operation reports
//! `Unsupported`. A real backend must honor the same contract the
//! in-memory implementation does, including its absence semantics:
//! `NotFound` from `find`, `Ok(false)` from `delete` on a missing id.

use async_trait::async_trait;

use roster_domain::model::employee::{Employee, EmployeeId};
use roster_domain::repository::employee_repository::{EmployeeRepository, RepositoryError};

/// Placeholder external-database repository.
#[derive(Debug, Clone, Default)]
pub struct DatabaseEmployeeRepository;

impl DatabaseEmployeeRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmployeeRepository for DatabaseEmployeeRepository {
    async fn find(&self, _id: EmployeeId) -> Result<Employee, RepositoryError> {
        Err(RepositoryError::Unsupported { operation: "find" })
    }

    async fn search(&self, _query: &str) -> Result<Vec<Employee>, RepositoryError> {
        Err(RepositoryError::Unsupported { operation: "search" })
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        // Canned rows until the real database query lands.
        Ok(vec![
            Employee::new(
                EmployeeId::new(1),
                "João Silva",
                "Desenvolvedor",
                "TI",
                "joao@exemplo.com",
            )?,
            Employee::new(
                EmployeeId::new(2),
                "Maria Santos",
                "Analista",
                "Segurança",
                "maria@exemplo.com",
            )?,
        ])
    }

    async fn store(&self, _employee: &Employee) -> Result<EmployeeId, RepositoryError> {
        Err(RepositoryError::Unsupported { operation: "store" })
    }

    async fn delete(&self, _id: EmployeeId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unsupported { operation: "delete" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_all_returns_the_canned_rows() {
        let repo = DatabaseEmployeeRepository::new();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].full_name(), "João Silva");
        assert_eq!(all[1].department(), "Segurança");
    }

    #[tokio::test]
    async fn test_unimplemented_operations_report_unsupported() {
        let repo = DatabaseEmployeeRepository::new();

        assert!(matches!(
            repo.find(EmployeeId::new(1)).await,
            Err(RepositoryError::Unsupported { operation: "find" })
        ));
        assert!(matches!(
            repo.search("ti").await,
            Err(RepositoryError::Unsupported { operation: "search" })
        ));
        assert!(matches!(
            repo.delete(EmployeeId::new(1)).await,
            Err(RepositoryError::Unsupported { operation: "delete" })
        ));
    }
}
