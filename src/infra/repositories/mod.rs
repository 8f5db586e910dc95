//! Repository layer - Data access abstraction
//!
//! One repository per aggregate, each a trait (for dependency injection and
//! mocking) plus a SeaORM-backed store.

mod address_repository;
mod company_repository;
mod department_repository;
mod employee_address_repository;
mod employee_repository;
pub(crate) mod entities;
mod user_repository;

pub use address_repository::{AddressRepository, AddressStore};
pub use company_repository::{CompanyRepository, CompanyStore};
pub use department_repository::{DepartmentRepository, DepartmentStore};
pub use employee_address_repository::{EmployeeAddressRepository, EmployeeAddressStore};
pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use address_repository::MockAddressRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use company_repository::MockCompanyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use department_repository::MockDepartmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_address_repository::MockEmployeeAddressRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
