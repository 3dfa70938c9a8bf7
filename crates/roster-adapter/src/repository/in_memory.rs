//! In-Memory Employee Repository
//!
//! Reference implementation of the repository port. The authoritative
//! collection lives in process memory; nothing survives a restart.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use roster_domain::model::employee::{Employee, EmployeeId};
use roster_domain::repository::employee_repository::{EmployeeRepository, RepositoryError};

/// In-memory Employee Repository.
///
/// The collection keeps insertion order, and ids grow monotonically from
/// the current maximum: `max(existing ids, 0) + 1`. Ids freed below the
/// maximum are never reassigned (no gap-filling). Reads hand back fresh
/// `Vec`s, never aliases of the collection.
///
/// Thread-safe via `RwLock`; no operation suspends.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<Vec<Employee>>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            employees: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Repository pre-loaded with the fixed demo roster.
    pub fn seeded() -> Self {
        let roster = vec![
            Employee::new(
                EmployeeId::new(1),
                "Carlos Souza",
                "Gerente",
                "Operações",
                "carlos@exemplo.com",
            ),
            Employee::new(
                EmployeeId::new(2),
                "Ana Lima",
                "Técnica",
                "Manutenção",
                "ana@exemplo.com",
            ),
            Employee::new(
                EmployeeId::new(3),
                "Pedro Costa",
                "Supervisor",
                "Segurança",
                "pedro@exemplo.com",
            ),
        ]
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("demo roster is valid");

        Self {
            employees: Arc::new(RwLock::new(roster)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Employee>>, RepositoryError> {
        self.employees.read().map_err(|_| RepositoryError::Backend {
            message: "employee collection lock poisoned".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Employee>>, RepositoryError> {
        self.employees.write().map_err(|_| RepositoryError::Backend {
            message: "employee collection lock poisoned".to_string(),
        })
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find(&self, id: EmployeeId) -> Result<Employee, RepositoryError> {
        let employees = self.read()?;
        employees
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    async fn search(&self, query: &str) -> Result<Vec<Employee>, RepositoryError> {
        let query = query.to_lowercase();
        let employees = self.read()?;
        Ok(employees
            .iter()
            .filter(|e| {
                e.full_name().to_lowercase().contains(&query)
                    || e.role().to_lowercase().contains(&query)
                    || e.department().to_lowercase().contains(&query)
            })
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        // Shallow copy: records are immutable, the Vec is the caller's.
        Ok(self.read()?.clone())
    }

    async fn store(&self, employee: &Employee) -> Result<EmployeeId, RepositoryError> {
        let mut employees = self.write()?;
        // Monotonic by current max, not gap-filling: ids freed below the
        // maximum are never handed out again.
        let next_id = EmployeeId::new(
            employees
                .iter()
                .map(|e| e.id().value())
                .max()
                .unwrap_or(0)
                + 1,
        );
        employees.push(employee.with_id(next_id));
        Ok(next_id)
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        let mut employees = self.write()?;
        match employees.iter().position(|e| e.id() == id) {
            Some(index) => {
                employees.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
