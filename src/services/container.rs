//! Service Container - Centralized service access.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{AddressService, AuthService, CompanyService, DepartmentService, EmployeeService};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get company service
    fn companies(&self) -> Arc<dyn CompanyService>;

    /// Get department service
    fn departments(&self) -> Arc<dyn DepartmentService>;

    /// Get employee service
    fn employees(&self) -> Arc<dyn EmployeeService>;

    /// Get address service
    fn addresses(&self) -> Arc<dyn AddressService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    company_service: Arc<dyn CompanyService>,
    department_service: Arc<dyn DepartmentService>,
    employee_service: Arc<dyn EmployeeService>,
    address_service: Arc<dyn AddressService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        company_service: Arc<dyn CompanyService>,
        department_service: Arc<dyn DepartmentService>,
        employee_service: Arc<dyn EmployeeService>,
        address_service: Arc<dyn AddressService>,
    ) -> Self {
        Self {
            auth_service,
            company_service,
            department_service,
            employee_service,
            address_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{
            AddressManager, Authenticator, CompanyManager, DepartmentManager, EmployeeManager,
        };

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config));
        let company_service = Arc::new(CompanyManager::new(uow.clone()));
        let department_service = Arc::new(DepartmentManager::new(uow.clone()));
        let employee_service = Arc::new(EmployeeManager::new(uow.clone()));
        let address_service = Arc::new(AddressManager::new(uow));

        Self {
            auth_service,
            company_service,
            department_service,
            employee_service,
            address_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyService> {
        self.company_service.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentService> {
        self.department_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressService> {
        self.address_service.clone()
    }
}
