//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Each module provides `From`/`TryFrom` conversions into the domain types;
//! the `TryFrom` variants parse the discriminator/type columns and fail on
//! values outside the closed enumerations.

pub mod address;
pub mod address_relation;
pub mod company;
pub mod department;
pub mod employee;
pub mod employee_address;
pub mod user;
