//! # Roster - employee directory demo
//!
//! This is the composition root that wires everything together:
//!
//! ```text
//! main.rs - Dependency Injection & Wiring
//!   ├── Reads:   AppConfig (which backend to use)
//!   ├── Creates: InMemoryEmployeeRepository or DatabaseEmployeeRepository
//!   ├── Creates: EmployeeService (usecase) over the chosen repository
//!   └── Runs:    a walk through every directory operation
//! ```
//!
//! The service never learns which repository it got; that is the point.

mod config;

use std::path::Path;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{AppConfig, Backend};
use roster_adapter::repository::database::DatabaseEmployeeRepository;
use roster_adapter::repository::in_memory::InMemoryEmployeeRepository;
use roster_domain::model::employee::{Employee, EmployeeId};
use roster_domain::repository::employee_repository::EmployeeRepository;
use roster_usecase::EmployeeService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match std::env::var_os("ROSTER_CONFIG") {
        Some(path) => AppConfig::from_file(Path::new(&path))?,
        None => AppConfig::default(),
    };

    // Composition root: pick the backend once. Nothing below this line
    // cares which one it is.
    let repository: Arc<dyn EmployeeRepository> = match config.backend {
        Backend::Memory => Arc::new(InMemoryEmployeeRepository::seeded()),
        Backend::Database => Arc::new(DatabaseEmployeeRepository::new()),
    };
    let service = EmployeeService::new(repository);

    info!("roster demo starting, backend: {:?}", config.backend);

    let all = service.find_all().await?;
    info!("{} employees on the roster", all.len());
    for employee in &all {
        info!(
            "  #{} {} - {} ({})",
            employee.id(),
            employee.full_name(),
            employee.role(),
            employee.department()
        );
    }

    let security = service.search("segurança").await?;
    info!("search 'segurança' matched {} employee(s)", security.len());

    let new_employee = Employee::new(
        EmployeeId::new(0), // placeholder, the repository assigns the real id
        "Beatriz Rocha",
        "Analista",
        "Operações",
        "beatriz@exemplo.com",
    )?;
    let id = service.store(&new_employee).await?;
    info!("stored Beatriz Rocha under id {}", id);

    let stored = service.find(id).await?;
    info!("find({}) -> {} <{}>", id, stored.full_name(), stored.email());

    let removed = service.delete(id).await?;
    info!("delete({}) -> {}", id, removed);

    info!("roster demo complete");

    Ok(())
}
