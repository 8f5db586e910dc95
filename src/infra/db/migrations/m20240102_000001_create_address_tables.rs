//! Migration: Create the address tables.
//!
//! addresses, the polymorphic address_relations link table and the typed
//! employee_addresses table. Both dependent tables cascade on delete of
//! their parent. entity_kind is a discriminator, so address_relations has
//! no foreign key on the owner side.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Addresses::FullAddress)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Addresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Addresses::ModifiedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AddressRelations::Table)
                    .col(ColumnDef::new(AddressRelations::AddressId).uuid().not_null())
                    .col(
                        ColumnDef::new(AddressRelations::EntityKind)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AddressRelations::EntityId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AddressRelations::AddressId)
                            .col(AddressRelations::EntityKind)
                            .col(AddressRelations::EntityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_relations_address")
                            .from(AddressRelations::Table, AddressRelations::AddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner-side lookups (addresses_of) scan by discriminator pair
        manager
            .create_index(
                Index::create()
                    .name("idx_address_relations_owner")
                    .table(AddressRelations::Table)
                    .col(AddressRelations::EntityKind)
                    .col(AddressRelations::EntityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeAddresses::Table)
                    .col(
                        ColumnDef::new(EmployeeAddresses::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeAddresses::AddressType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeAddresses::Address)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeAddresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeAddresses::ModifiedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EmployeeAddresses::EmployeeId)
                            .col(EmployeeAddresses::AddressType),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_addresses_employee")
                            .from(EmployeeAddresses::Table, EmployeeAddresses::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeAddresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AddressRelations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Addresses {
    Table,
    Id,
    FullAddress,
    CreatedAt,
    ModifiedAt,
}

#[derive(Iden)]
enum AddressRelations {
    Table,
    AddressId,
    EntityKind,
    EntityId,
}

#[derive(Iden)]
enum EmployeeAddresses {
    Table,
    EmployeeId,
    AddressType,
    Address,
    CreatedAt,
    ModifiedAt,
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
}
