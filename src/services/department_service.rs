//! Department service - department directory use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateDepartment, Department, UpdateDepartment};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Department service trait for dependency injection.
#[async_trait]
pub trait DepartmentService: Send + Sync {
    /// Get department by ID
    async fn get_department(&self, id: i32) -> AppResult<Department>;

    /// List departments with total count for the requested page
    async fn list_departments(&self, params: PaginationParams)
        -> AppResult<(Vec<Department>, u64)>;

    /// List all departments belonging to one company
    async fn list_company_departments(&self, company_id: i32) -> AppResult<Vec<Department>>;

    /// Create a new department under an existing company
    async fn create_department(&self, data: CreateDepartment) -> AppResult<Department>;

    /// Update department details
    async fn update_department(&self, id: i32, data: UpdateDepartment) -> AppResult<Department>;

    /// Delete department; fails while employees still reference it
    async fn delete_department(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of DepartmentService using Unit of Work.
pub struct DepartmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DepartmentManager<U> {
    /// Create new department service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DepartmentService for DepartmentManager<U> {
    async fn get_department(&self, id: i32) -> AppResult<Department> {
        self.uow
            .departments()
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn list_departments(
        &self,
        params: PaginationParams,
    ) -> AppResult<(Vec<Department>, u64)> {
        self.uow.departments().list(&params).await
    }

    async fn list_company_departments(&self, company_id: i32) -> AppResult<Vec<Department>> {
        // Distinguish "no departments" from "no such company"
        self.uow
            .companies()
            .find_by_id(company_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.uow.departments().list_by_company(company_id).await
    }

    async fn create_department(&self, data: CreateDepartment) -> AppResult<Department> {
        self.uow.departments().create(data).await
    }

    async fn update_department(&self, id: i32, data: UpdateDepartment) -> AppResult<Department> {
        self.uow.departments().update(id, data).await
    }

    async fn delete_department(&self, id: i32) -> AppResult<()> {
        self.uow.departments().delete(id).await
    }
}
