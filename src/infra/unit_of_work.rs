//! Unit of Work pattern implementation.
//!
//! Centralizes access to the per-aggregate repositories and manages the
//! transaction lifecycle (begin, commit, rollback). A single transactional
//! closure can touch several aggregates; it commits atomically or not at
//! all, and constraint failures propagate to the caller uncommitted.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::{
    entities, AddressRepository, AddressStore, CompanyRepository, CompanyStore,
    DepartmentRepository, DepartmentStore, EmployeeAddressRepository, EmployeeAddressStore,
    EmployeeRepository, EmployeeStore, UserRepository, UserStore,
};
use crate::domain::{AddressOwner, AddressRelation};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction
/// management. Note: the generic `transaction` method makes this trait
/// non-mockable directly; for testing, mock the repositories and stub the
/// transactional paths, or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get company repository
    fn companies(&self) -> Arc<dyn CompanyRepository>;

    /// Get department repository
    fn departments(&self) -> Arc<dyn DepartmentRepository>;

    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    /// Get employee address repository
    fn employee_addresses(&self) -> Arc<dyn EmployeeAddressRepository>;

    /// Get address repository
    fn addresses(&self) -> Arc<dyn AddressRepository>;

    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Execute a closure within a serializable transaction.
    ///
    /// Committed on success, rolled back on error. Serializable isolation:
    /// the transactional closures pair validation reads with writes, and the
    /// snapshot must not move between the two (the discriminator relation
    /// has no owner-side foreign key to fall back on).
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All operations performed through this context are part of the same
/// database transaction. The context borrows the transaction to ensure
/// proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get the transaction-scoped address repository
    pub fn addresses(&self) -> TxAddressRepository<'_> {
        TxAddressRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    company_repo: Arc<CompanyStore>,
    department_repo: Arc<DepartmentStore>,
    employee_repo: Arc<EmployeeStore>,
    employee_address_repo: Arc<EmployeeAddressStore>,
    address_repo: Arc<AddressStore>,
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            company_repo: Arc::new(CompanyStore::new(db.clone())),
            department_repo: Arc::new(DepartmentStore::new(db.clone())),
            employee_repo: Arc::new(EmployeeStore::new(db.clone())),
            employee_address_repo: Arc::new(EmployeeAddressStore::new(db.clone())),
            address_repo: Arc::new(AddressStore::new(db.clone())),
            user_repo: Arc::new(UserStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.company_repo.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.department_repo.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    fn employee_addresses(&self) -> Arc<dyn EmployeeAddressRepository> {
        self.employee_address_repo.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.address_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::Serializable), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware address repository.
///
/// Covers the link operations that must pair an owner-existence check with
/// the insert in one atomic step: entity_kind is a discriminator, not a
/// table switch, so the relational engine cannot enforce the owner side.
pub struct TxAddressRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxAddressRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Resolve the owner's kind to a concrete table lookup.
    pub async fn owner_exists(&self, owner: AddressOwner) -> AppResult<bool> {
        let count = match owner {
            AddressOwner::Company(id) => {
                entities::company::Entity::find_by_id(id)
                    .count(self.txn)
                    .await
            }
            AddressOwner::Department(id) => {
                entities::department::Entity::find_by_id(id)
                    .count(self.txn)
                    .await
            }
            AddressOwner::Employee(id) => {
                entities::employee::Entity::find_by_id(id)
                    .count(self.txn)
                    .await
            }
        }
        .map_err(AppError::from)?;

        Ok(count > 0)
    }

    /// Insert a link row within the transaction.
    pub async fn insert_link(
        &self,
        address_id: Uuid,
        owner: AddressOwner,
    ) -> AppResult<AddressRelation> {
        let active_model = entities::address_relation::ActiveModel {
            address_id: Set(address_id),
            entity_kind: Set(owner.kind().as_str().to_string()),
            entity_id: Set(owner.entity_id()),
        };

        let model = active_model.insert(self.txn).await.map_err(AppError::from)?;

        AddressRelation::try_from(model)
    }

    /// Enumerate the owners linked to an address within the transaction.
    pub async fn relations_of(&self, address_id: Uuid) -> AppResult<Vec<AddressRelation>> {
        let models = entities::address_relation::Entity::find()
            .filter(entities::address_relation::Column::AddressId.eq(address_id))
            .all(self.txn)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(AddressRelation::try_from).collect()
    }
}
