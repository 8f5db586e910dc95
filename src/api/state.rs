//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AddressService, AuthService, CompanyService, DepartmentService, EmployeeService,
    ServiceContainer, Services,
};

/// Application state containing all services (DI container).
///
/// Use `from_config()` for recommended initialization with full
/// ServiceContainer and UnitOfWork support.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Company service
    pub company_service: Arc<dyn CompanyService>,
    /// Department service
    pub department_service: Arc<dyn DepartmentService>,
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Address service
    pub address_service: Arc<dyn AddressService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let container = Services::from_connection(database.connection(), config);

        Self {
            auth_service: container.auth(),
            company_service: container.companies(),
            department_service: container.departments(),
            employee_service: container.employees(),
            address_service: container.addresses(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Primarily used by tests that substitute mock services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        company_service: Arc<dyn CompanyService>,
        department_service: Arc<dyn DepartmentService>,
        employee_service: Arc<dyn EmployeeService>,
        address_service: Arc<dyn AddressService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            company_service,
            department_service,
            employee_service,
            address_service,
            database,
        }
    }
}
