//! Department repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::department::{self, ActiveModel, Entity as DepartmentEntity};
use crate::domain::{never_modified, CreateDepartment, Department, UpdateDepartment};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Department repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find department by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Department>>;

    /// List departments with pagination, returning (page, total count)
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Department>, u64)>;

    /// List all departments belonging to a company
    async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<Department>>;

    /// Create a new department
    async fn create(&self, data: CreateDepartment) -> AppResult<Department>;

    /// Update department fields
    async fn update(&self, id: i32, data: UpdateDepartment) -> AppResult<Department>;

    /// Delete department by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of DepartmentRepository
pub struct DepartmentStore {
    db: DatabaseConnection,
}

impl DepartmentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for DepartmentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Department>> {
        let result = DepartmentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Department::from))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Department>, u64)> {
        let paginator = DepartmentEntity::find()
            .order_by_asc(department::Column::Id)
            .paginate(&self.db, params.limit());
        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(Department::from).collect(), total))
    }

    async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<Department>> {
        let models = DepartmentEntity::find()
            .filter(department::Column::CompanyId.eq(company_id))
            .order_by_asc(department::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Department::from).collect())
    }

    async fn create(&self, data: CreateDepartment) -> AppResult<Department> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            company_id: Set(data.company_id),
            created_at: Set(Utc::now()),
            modified_at: Set(never_modified()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        Ok(Department::from(model))
    }

    async fn update(&self, id: i32, data: UpdateDepartment) -> AppResult<Department> {
        let department = DepartmentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = department.into();

        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(description) = data.description {
            active.description = Set(Some(description));
        }
        active.modified_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Department::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = DepartmentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
