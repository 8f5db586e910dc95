//! Address service - shared address pool and polymorphic relations.
//!
//! Addresses live in a shared pool and can be linked to a company,
//! department or employee through a discriminator relation. The link path
//! validates the owner inside the same transaction as the relation insert,
//! since the discriminator column cannot carry a foreign key.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Address, AddressOwner, AddressRelation, CreateAddress, UpdateAddress};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Address service trait for dependency injection.
#[async_trait]
pub trait AddressService: Send + Sync {
    /// Get address by ID
    async fn get_address(&self, id: Uuid) -> AppResult<Address>;

    /// List addresses with total count for the requested page
    async fn list_addresses(&self, params: PaginationParams) -> AppResult<(Vec<Address>, u64)>;

    /// Create a new pool address
    async fn create_address(&self, data: CreateAddress) -> AppResult<Address>;

    /// Update the address text
    async fn update_address(&self, id: Uuid, data: UpdateAddress) -> AppResult<Address>;

    /// Delete address; its relations go with it
    async fn delete_address(&self, id: Uuid) -> AppResult<()>;

    /// Link an address to an owning entity
    async fn link(&self, address_id: Uuid, owner: AddressOwner) -> AppResult<AddressRelation>;

    /// Remove one link
    async fn unlink(&self, address_id: Uuid, owner: AddressOwner) -> AppResult<()>;

    /// List every owner linked to one address
    async fn relations_of(&self, address_id: Uuid) -> AppResult<Vec<AddressRelation>>;

    /// List every address linked to one owner
    async fn addresses_of(&self, owner: AddressOwner) -> AppResult<Vec<Address>>;
}

/// Concrete implementation of AddressService using Unit of Work.
pub struct AddressManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AddressManager<U> {
    /// Create new address service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Resolve the owner against its own table, outside a transaction.
    /// Used by read paths; the link path re-checks transactionally.
    async fn owner_exists(&self, owner: AddressOwner) -> AppResult<bool> {
        let found = match owner {
            AddressOwner::Company(id) => self.uow.companies().find_by_id(id).await?.is_some(),
            AddressOwner::Department(id) => {
                self.uow.departments().find_by_id(id).await?.is_some()
            }
            AddressOwner::Employee(id) => self.uow.employees().find_by_id(id).await?.is_some(),
        };
        Ok(found)
    }
}

#[async_trait]
impl<U: UnitOfWork> AddressService for AddressManager<U> {
    async fn get_address(&self, id: Uuid) -> AppResult<Address> {
        self.uow.addresses().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_addresses(&self, params: PaginationParams) -> AppResult<(Vec<Address>, u64)> {
        self.uow.addresses().list(&params).await
    }

    async fn create_address(&self, data: CreateAddress) -> AppResult<Address> {
        self.uow
            .addresses()
            .create(Address::new(data.full_address))
            .await
    }

    async fn update_address(&self, id: Uuid, data: UpdateAddress) -> AppResult<Address> {
        self.uow.addresses().update(id, data.full_address).await
    }

    async fn delete_address(&self, id: Uuid) -> AppResult<()> {
        self.uow.addresses().delete(id).await
    }

    async fn link(&self, address_id: Uuid, owner: AddressOwner) -> AppResult<AddressRelation> {
        // 404 on a missing address before opening the transaction
        self.uow
            .addresses()
            .find_by_id(address_id)
            .await?
            .ok_or(AppError::NotFound)?;

        // Owner check and relation insert share one serializable snapshot
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let addresses = ctx.addresses();

                    if !addresses.owner_exists(owner).await? {
                        return Err(AppError::bad_request(format!(
                            "{} {} does not exist",
                            owner.kind(),
                            owner.entity_id()
                        )));
                    }

                    addresses.insert_link(address_id, owner).await
                })
            })
            .await
    }

    async fn unlink(&self, address_id: Uuid, owner: AddressOwner) -> AppResult<()> {
        self.uow.addresses().delete_link(address_id, owner).await
    }

    async fn relations_of(&self, address_id: Uuid) -> AppResult<Vec<AddressRelation>> {
        self.uow
            .addresses()
            .find_by_id(address_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.uow.addresses().relations_of(address_id).await
    }

    async fn addresses_of(&self, owner: AddressOwner) -> AppResult<Vec<Address>> {
        if !self.owner_exists(owner).await? {
            return Err(AppError::NotFound);
        }

        self.uow.addresses().addresses_of(owner).await
    }
}
