//! Company service - company directory use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Company, CreateCompany, UpdateCompany};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Company service trait for dependency injection.
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// Get company by ID
    async fn get_company(&self, id: i32) -> AppResult<Company>;

    /// List companies with total count for the requested page
    async fn list_companies(&self, params: PaginationParams) -> AppResult<(Vec<Company>, u64)>;

    /// Create a new company
    async fn create_company(&self, data: CreateCompany) -> AppResult<Company>;

    /// Update company details
    async fn update_company(&self, id: i32, data: UpdateCompany) -> AppResult<Company>;

    /// Delete company; fails while departments or employees still reference it
    async fn delete_company(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CompanyService using Unit of Work.
pub struct CompanyManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CompanyManager<U> {
    /// Create new company service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CompanyService for CompanyManager<U> {
    async fn get_company(&self, id: i32) -> AppResult<Company> {
        self.uow
            .companies()
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn list_companies(&self, params: PaginationParams) -> AppResult<(Vec<Company>, u64)> {
        self.uow.companies().list(&params).await
    }

    async fn create_company(&self, data: CreateCompany) -> AppResult<Company> {
        self.uow.companies().create(data).await
    }

    async fn update_company(&self, id: i32, data: UpdateCompany) -> AppResult<Company> {
        self.uow.companies().update(id, data).await
    }

    async fn delete_company(&self, id: i32) -> AppResult<()> {
        self.uow.companies().delete(id).await
    }
}
