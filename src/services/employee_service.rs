//! Employee service - employee directory and typed address slot use cases.
//!
//! Employees carry up to one address per address type. The slot operations
//! distinguish insert (fails when the slot is taken) from upsert (overwrites
//! in place), so both strict and idempotent clients are served.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    AddressType, CreateEmployee, Employee, EmployeeAddress, UpdateEmployee,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Get employee by ID
    async fn get_employee(&self, id: i32) -> AppResult<Employee>;

    /// List employees with total count for the requested page
    async fn list_employees(&self, params: PaginationParams) -> AppResult<(Vec<Employee>, u64)>;

    /// Create a new employee under an existing company and department
    async fn create_employee(&self, data: CreateEmployee) -> AppResult<Employee>;

    /// Update employee details
    async fn update_employee(&self, id: i32, data: UpdateEmployee) -> AppResult<Employee>;

    /// Delete employee; typed address slots go with it
    async fn delete_employee(&self, id: i32) -> AppResult<()>;

    /// List all typed address slots of one employee
    async fn list_employee_addresses(&self, employee_id: i32)
        -> AppResult<Vec<EmployeeAddress>>;

    /// Get one typed address slot
    async fn get_employee_address(
        &self,
        employee_id: i32,
        address_type: AddressType,
    ) -> AppResult<EmployeeAddress>;

    /// Fill an empty slot; fails with Conflict when the slot is taken
    async fn add_employee_address(
        &self,
        employee_id: i32,
        address_type: AddressType,
        address: String,
    ) -> AppResult<EmployeeAddress>;

    /// Fill or overwrite a slot in place
    async fn upsert_employee_address(
        &self,
        employee_id: i32,
        address_type: AddressType,
        address: String,
    ) -> AppResult<EmployeeAddress>;

    /// Clear one slot
    async fn remove_employee_address(
        &self,
        employee_id: i32,
        address_type: AddressType,
    ) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    /// Create new employee service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Resolve the employee or fail with NotFound, so slot operations on a
    /// missing employee surface as 404 instead of an empty list or a
    /// foreign key violation.
    async fn ensure_employee(&self, employee_id: i32) -> AppResult<()> {
        self.uow
            .employees()
            .find_by_id(employee_id)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn get_employee(&self, id: i32) -> AppResult<Employee> {
        self.uow.employees().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_employees(&self, params: PaginationParams) -> AppResult<(Vec<Employee>, u64)> {
        self.uow.employees().list(&params).await
    }

    async fn create_employee(&self, data: CreateEmployee) -> AppResult<Employee> {
        self.uow.employees().create(data).await
    }

    async fn update_employee(&self, id: i32, data: UpdateEmployee) -> AppResult<Employee> {
        self.uow.employees().update(id, data).await
    }

    async fn delete_employee(&self, id: i32) -> AppResult<()> {
        self.uow.employees().delete(id).await
    }

    async fn list_employee_addresses(
        &self,
        employee_id: i32,
    ) -> AppResult<Vec<EmployeeAddress>> {
        self.ensure_employee(employee_id).await?;
        self.uow.employee_addresses().list(employee_id).await
    }

    async fn get_employee_address(
        &self,
        employee_id: i32,
        address_type: AddressType,
    ) -> AppResult<EmployeeAddress> {
        self.uow
            .employee_addresses()
            .find(employee_id, address_type)
            .await?
            .ok_or_not_found()
    }

    async fn add_employee_address(
        &self,
        employee_id: i32,
        address_type: AddressType,
        address: String,
    ) -> AppResult<EmployeeAddress> {
        self.ensure_employee(employee_id).await?;
        self.uow
            .employee_addresses()
            .insert(employee_id, address_type, address)
            .await
    }

    async fn upsert_employee_address(
        &self,
        employee_id: i32,
        address_type: AddressType,
        address: String,
    ) -> AppResult<EmployeeAddress> {
        self.ensure_employee(employee_id).await?;
        self.uow
            .employee_addresses()
            .upsert(employee_id, address_type, address)
            .await
    }

    async fn remove_employee_address(
        &self,
        employee_id: i32,
        address_type: AddressType,
    ) -> AppResult<()> {
        self.uow
            .employee_addresses()
            .remove(employee_id, address_type)
            .await
    }
}
