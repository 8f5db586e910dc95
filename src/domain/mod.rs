//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod address;
pub mod company;
pub mod department;
pub mod employee;
pub mod password;
pub mod user;

pub use address::{
    Address, AddressOwner, AddressRelation, AddressRelationResponse, AddressResponse,
    CreateAddress, EntityKind, LinkAddress, UpdateAddress,
};
pub use company::{Company, CompanyResponse, CreateCompany, UpdateCompany};
pub use department::{CreateDepartment, Department, DepartmentResponse, UpdateDepartment};
pub use employee::{
    AddressType, CreateEmployee, Employee, EmployeeAddress, EmployeeAddressResponse,
    EmployeeResponse, UpdateEmployee, UpsertEmployeeAddress,
};
pub use password::Password;
pub use user::{RegisterUser, User, UserResponse};

use chrono::{DateTime, Utc};

/// Sentinel for audit timestamps: the Unix epoch means "never modified".
///
/// `modified_at` starts at this value and is only moved by explicit updates;
/// the persistence layer never auto-touches it.
pub fn never_modified() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Batch variant of the entity-to-response conversions.
pub fn to_responses<D, R: From<D>>(items: Vec<D>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
