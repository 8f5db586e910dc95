//! Company repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use super::entities::company::{self, ActiveModel, Entity as CompanyEntity};
use crate::domain::{never_modified, Company, CreateCompany, UpdateCompany};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Company repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find company by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Company>>;

    /// List companies with pagination, returning (page, total count)
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Company>, u64)>;

    /// Create a new company
    async fn create(&self, data: CreateCompany) -> AppResult<Company>;

    /// Update company fields
    async fn update(&self, id: i32, data: UpdateCompany) -> AppResult<Company>;

    /// Delete company by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CompanyRepository
pub struct CompanyStore {
    db: DatabaseConnection,
}

impl CompanyStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for CompanyStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Company>> {
        let result = CompanyEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Company::from))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Company>, u64)> {
        let paginator = CompanyEntity::find()
            .order_by_asc(company::Column::Id)
            .paginate(&self.db, params.limit());
        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(Company::from).collect(), total))
    }

    async fn create(&self, data: CreateCompany) -> AppResult<Company> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            created_at: Set(Utc::now()),
            modified_at: Set(never_modified()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        Ok(Company::from(model))
    }

    async fn update(&self, id: i32, data: UpdateCompany) -> AppResult<Company> {
        let company = CompanyEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = company.into();

        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(description) = data.description {
            active.description = Set(Some(description));
        }
        active.modified_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Company::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = CompanyEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
