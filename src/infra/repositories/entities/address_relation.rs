//! Address relation database entity for SeaORM.
//!
//! Composite primary key (address_id, entity_kind, entity_id). The only
//! real foreign key is the address side (ON DELETE CASCADE); entity_kind
//! is a discriminator, so the owner side is validated in the application.

use sea_orm::entity::prelude::*;

use crate::domain::{AddressOwner, AddressRelation, EntityKind};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "address_relations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub address_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_kind: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::Id"
    )]
    Address,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fails on entity_kind values outside the closed discriminator.
impl TryFrom<Model> for AddressRelation {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let kind = EntityKind::try_from(model.entity_kind.as_str())?;
        Ok(AddressRelation {
            address_id: model.address_id,
            owner: AddressOwner::new(kind, model.entity_id),
        })
    }
}
