//! Address repository implementation.
//!
//! Covers both the canonical address rows and their polymorphic link rows.
//! Deleting an address needs no link bookkeeping here: the database cascade
//! removes its relations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use super::entities::address::{self, ActiveModel, Entity as AddressEntity};
use super::entities::address_relation::{
    self, ActiveModel as RelationActiveModel, Entity as RelationEntity,
};
use crate::domain::{Address, AddressOwner, AddressRelation};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Address repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Find address by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Address>>;

    /// List addresses with pagination, returning (page, total count)
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Address>, u64)>;

    /// Persist a freshly constructed address
    async fn create(&self, address: Address) -> AppResult<Address>;

    /// Replace the address text, touching modified_at
    async fn update(&self, id: Uuid, full_address: String) -> AppResult<Address>;

    /// Delete address by id (cascades to its relations)
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Insert a link row; the address side is enforced by the foreign key
    async fn insert_link(&self, address_id: Uuid, owner: AddressOwner)
        -> AppResult<AddressRelation>;

    /// Remove one link row
    async fn delete_link(&self, address_id: Uuid, owner: AddressOwner) -> AppResult<()>;

    /// Enumerate all owners linked to an address
    async fn relations_of(&self, address_id: Uuid) -> AppResult<Vec<AddressRelation>>;

    /// Enumerate all addresses linked to an owner
    async fn addresses_of(&self, owner: AddressOwner) -> AppResult<Vec<Address>>;
}

/// Concrete implementation of AddressRepository
pub struct AddressStore {
    db: DatabaseConnection,
}

impl AddressStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for AddressStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Address>> {
        let result = AddressEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Address::from))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Address>, u64)> {
        let paginator = AddressEntity::find()
            .order_by_asc(address::Column::CreatedAt)
            .paginate(&self.db, params.limit());
        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page.saturating_sub(1))
            .await
            .map_err(AppError::from)?;

        Ok((models.into_iter().map(Address::from).collect(), total))
    }

    async fn create(&self, new: Address) -> AppResult<Address> {
        let active_model = ActiveModel {
            id: Set(new.id),
            full_address: Set(new.full_address),
            created_at: Set(new.created_at),
            modified_at: Set(new.modified_at),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        Ok(Address::from(model))
    }

    async fn update(&self, id: Uuid, full_address: String) -> AppResult<Address> {
        let existing = AddressEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.full_address = Set(full_address);
        active.modified_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Address::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AddressEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn insert_link(
        &self,
        address_id: Uuid,
        owner: AddressOwner,
    ) -> AppResult<AddressRelation> {
        let active_model = RelationActiveModel {
            address_id: Set(address_id),
            entity_kind: Set(owner.kind().as_str().to_string()),
            entity_id: Set(owner.entity_id()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        AddressRelation::try_from(model)
    }

    async fn delete_link(&self, address_id: Uuid, owner: AddressOwner) -> AppResult<()> {
        let result = RelationEntity::delete_by_id((
            address_id,
            owner.kind().as_str().to_string(),
            owner.entity_id(),
        ))
        .exec(&self.db)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn relations_of(&self, address_id: Uuid) -> AppResult<Vec<AddressRelation>> {
        let models = RelationEntity::find()
            .filter(address_relation::Column::AddressId.eq(address_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(AddressRelation::try_from).collect()
    }

    async fn addresses_of(&self, owner: AddressOwner) -> AppResult<Vec<Address>> {
        let models = AddressEntity::find()
            .join(JoinType::InnerJoin, address::Relation::Relations.def())
            .filter(address_relation::Column::EntityKind.eq(owner.kind().as_str()))
            .filter(address_relation::Column::EntityId.eq(owner.entity_id()))
            .order_by_asc(address::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Address::from).collect())
    }
}
