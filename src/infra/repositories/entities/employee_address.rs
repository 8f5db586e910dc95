//! Employee address database entity for SeaORM.
//!
//! Composite primary key (employee_id, address_type): one row per address
//! slot. Rows are removed by the database cascade when the employee goes.

use sea_orm::entity::prelude::*;

use crate::domain::{AddressType, EmployeeAddress};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employee_addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub address_type: String,
    pub address: String,
    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fails on address_type values outside the closed enumeration.
impl TryFrom<Model> for EmployeeAddress {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(EmployeeAddress {
            employee_id: model.employee_id,
            address_type: AddressType::try_from(model.address_type.as_str())?,
            address: model.address,
            created_at: model.created_at,
            modified_at: model.modified_at,
        })
    }
}
