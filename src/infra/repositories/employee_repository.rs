//! Employee repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{never_modified, CreateEmployee, Employee, UpdateEmployee};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Deleting an employee hard-deletes the row; the employee's typed address
/// rows go with it via the database cascade.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// List employees with pagination, returning (page, total count)
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Employee>, u64)>;

    /// Create a new employee
    async fn create(&self, data: CreateEmployee) -> AppResult<Employee>;

    /// Update employee fields
    async fn update(&self, id: i32, data: UpdateEmployee) -> AppResult<Employee>;

    /// Delete employee by id (cascades to employee addresses)
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Employee>, u64)> {
        let paginator = EmployeeEntity::find()
            .order_by_asc(employee::Column::Id)
            .paginate(&self.db, params.limit());
        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(Employee::from).collect(), total))
    }

    async fn create(&self, data: CreateEmployee) -> AppResult<Employee> {
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            birth_date: Set(data.birth_date),
            company_id: Set(data.company_id),
            department_id: Set(data.department_id),
            created_at: Set(Utc::now()),
            modified_at: Set(never_modified()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        Ok(Employee::from(model))
    }

    async fn update(&self, id: i32, data: UpdateEmployee) -> AppResult<Employee> {
        let employee = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = employee.into();

        if let Some(first_name) = data.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = data.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(birth_date) = data.birth_date {
            active.birth_date = Set(birth_date);
        }
        if let Some(department_id) = data.department_id {
            active.department_id = Set(department_id);
        }
        active.modified_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Employee::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
