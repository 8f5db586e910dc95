//! Employee address repository implementation.
//!
//! Rows are keyed by the composite (employee_id, address_type); `insert`
//! surfaces the composite-key violation as a conflict while `upsert`
//! overwrites the existing slot in place.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::employee_address::{self, ActiveModel, Entity as EmployeeAddressEntity};
use crate::domain::{never_modified, AddressType, EmployeeAddress};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee address repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeAddressRepository: Send + Sync {
    /// Find the address in one slot, if present
    async fn find(
        &self,
        employee_id: i32,
        address_type: AddressType,
    ) -> AppResult<Option<EmployeeAddress>>;

    /// List all (type, address) pairs of one employee
    async fn list(&self, employee_id: i32) -> AppResult<Vec<EmployeeAddress>>;

    /// Insert a new slot; fails with Conflict when the slot is taken
    async fn insert(
        &self,
        employee_id: i32,
        address_type: AddressType,
        address: String,
    ) -> AppResult<EmployeeAddress>;

    /// Insert or overwrite the slot in place
    async fn upsert(
        &self,
        employee_id: i32,
        address_type: AddressType,
        address: String,
    ) -> AppResult<EmployeeAddress>;

    /// Remove one slot
    async fn remove(&self, employee_id: i32, address_type: AddressType) -> AppResult<()>;
}

/// Concrete implementation of EmployeeAddressRepository
pub struct EmployeeAddressStore {
    db: DatabaseConnection,
}

impl EmployeeAddressStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn fresh_row(employee_id: i32, address_type: AddressType, address: String) -> ActiveModel {
        ActiveModel {
            employee_id: Set(employee_id),
            address_type: Set(address_type.as_str().to_string()),
            address: Set(address),
            created_at: Set(Utc::now()),
            modified_at: Set(never_modified()),
        }
    }
}

#[async_trait]
impl EmployeeAddressRepository for EmployeeAddressStore {
    async fn find(
        &self,
        employee_id: i32,
        address_type: AddressType,
    ) -> AppResult<Option<EmployeeAddress>> {
        let result = EmployeeAddressEntity::find_by_id((
            employee_id,
            address_type.as_str().to_string(),
        ))
        .one(&self.db)
        .await
        .map_err(AppError::from)?;

        result.map(EmployeeAddress::try_from).transpose()
    }

    async fn list(&self, employee_id: i32) -> AppResult<Vec<EmployeeAddress>> {
        let models = EmployeeAddressEntity::find()
            .filter(employee_address::Column::EmployeeId.eq(employee_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(EmployeeAddress::try_from).collect()
    }

    async fn insert(
        &self,
        employee_id: i32,
        address_type: AddressType,
        address: String,
    ) -> AppResult<EmployeeAddress> {
        let model = Self::fresh_row(employee_id, address_type, address)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        EmployeeAddress::try_from(model)
    }

    async fn upsert(
        &self,
        employee_id: i32,
        address_type: AddressType,
        address: String,
    ) -> AppResult<EmployeeAddress> {
        let existing = EmployeeAddressEntity::find_by_id((
            employee_id,
            address_type.as_str().to_string(),
        ))
        .one(&self.db)
        .await
        .map_err(AppError::from)?;

        let model = match existing {
            Some(row) => {
                let mut active: ActiveModel = row.into();
                active.address = Set(address);
                active.modified_at = Set(Utc::now());
                active.update(&self.db).await.map_err(AppError::from)?
            }
            None => {
                Self::fresh_row(employee_id, address_type, address)
                    .insert(&self.db)
                    .await
                    .map_err(AppError::from)?
            }
        };

        EmployeeAddress::try_from(model)
    }

    async fn remove(&self, employee_id: i32, address_type: AddressType) -> AppResult<()> {
        let result = EmployeeAddressEntity::delete_by_id((
            employee_id,
            address_type.as_str().to_string(),
        ))
        .exec(&self.db)
        .await
        .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
