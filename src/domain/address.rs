//! Address aggregate and its polymorphic ownership model.
//!
//! A canonical address row can be linked to any number of owning entities
//! through `AddressRelation`, a composite-keyed link row carrying an
//! entity-kind discriminator plus the owner's id. The relational engine
//! cannot enforce a foreign key across a discriminator, so owner validity
//! is checked at the application boundary via [`AddressOwner`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::never_modified;
use crate::errors::{AppError, AppResult};

/// Closed discriminator naming which table an [`AddressRelation`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Company,
    Department,
    Employee,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Company => "company",
            EntityKind::Department => "department",
            EntityKind::Employee => "employee",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown kinds are rejected, not defaulted: the enumeration is closed.
impl TryFrom<&str> for EntityKind {
    type Error = AppError;

    fn try_from(s: &str) -> AppResult<Self> {
        match s {
            "company" => Ok(EntityKind::Company),
            "department" => Ok(EntityKind::Department),
            "employee" => Ok(EntityKind::Employee),
            other => Err(AppError::bad_request(format!(
                "Unknown entity kind: {}",
                other
            ))),
        }
    }
}

/// Tagged owner reference, resolved to a concrete table lookup by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressOwner {
    Company(i32),
    Department(i32),
    Employee(i32),
}

impl AddressOwner {
    pub fn new(kind: EntityKind, entity_id: i32) -> Self {
        match kind {
            EntityKind::Company => AddressOwner::Company(entity_id),
            EntityKind::Department => AddressOwner::Department(entity_id),
            EntityKind::Employee => AddressOwner::Employee(entity_id),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            AddressOwner::Company(_) => EntityKind::Company,
            AddressOwner::Department(_) => EntityKind::Department,
            AddressOwner::Employee(_) => EntityKind::Employee,
        }
    }

    pub fn entity_id(&self) -> i32 {
        match self {
            AddressOwner::Company(id)
            | AddressOwner::Department(id)
            | AddressOwner::Employee(id) => *id,
        }
    }
}

/// Canonical address record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub full_address: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Address {
    /// Create a new address with a fresh id and the never-modified sentinel.
    pub fn new(full_address: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_address,
            created_at: Utc::now(),
            modified_at: never_modified(),
        }
    }

    /// Whether the row has ever been explicitly updated.
    pub fn is_modified(&self) -> bool {
        self.modified_at != never_modified()
    }
}

/// Link row between one address and one owning entity.
///
/// Composite-keyed on (address id, entity kind, entity id); the same owner
/// may link to many addresses and the same address to many owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRelation {
    pub address_id: Uuid,
    pub owner: AddressOwner,
}

// =============================================================================
// DTOs and conversions
// =============================================================================

/// Address creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAddress {
    /// Full address text
    #[validate(length(min = 1, max = 512, message = "Address must be 1-512 characters"))]
    #[schema(example = "1 Main Street, Springfield")]
    pub full_address: String,
}

/// Address update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAddress {
    /// New full address text
    #[validate(length(min = 1, max = 512, message = "Address must be 1-512 characters"))]
    #[schema(example = "2 Side Street, Springfield")]
    pub full_address: String,
}

/// Request linking an address to an owning entity
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LinkAddress {
    /// Which table the owner lives in
    pub entity_kind: EntityKind,
    /// Owner id within that table
    #[validate(range(min = 1, message = "entity_id must be positive"))]
    #[schema(example = 1)]
    pub entity_id: i32,
}

impl From<&LinkAddress> for AddressOwner {
    fn from(link: &LinkAddress) -> Self {
        AddressOwner::new(link.entity_kind, link.entity_id)
    }
}

/// Address response (wire shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddressResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "1 Main Street, Springfield")]
    pub full_address: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            full_address: address.full_address,
            created_at: address.created_at,
            modified_at: address.modified_at,
        }
    }
}

/// Address relation response (wire shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddressRelationResponse {
    pub address_id: Uuid,
    pub entity_kind: EntityKind,
    #[schema(example = 1)]
    pub entity_id: i32,
}

impl From<AddressRelation> for AddressRelationResponse {
    fn from(relation: AddressRelation) -> Self {
        Self {
            address_id: relation.address_id,
            entity_kind: relation.owner.kind(),
            entity_id: relation.owner.entity_id(),
        }
    }
}
