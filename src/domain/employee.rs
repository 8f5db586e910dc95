//! Employee aggregate, typed employee addresses and DTOs.
//!
//! An employee owns at most one address per [`AddressType`]; the pair
//! (employee id, address type) is the composite key of the employee-address
//! rows, and writes are upserts against that key.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::never_modified;
use crate::errors::{AppError, AppResult};

/// Closed enumeration of the address slots an employee may fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Unknown,
    Home,
    Work,
    Mailing,
    Residential,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Unknown => "unknown",
            AddressType::Home => "home",
            AddressType::Work => "work",
            AddressType::Mailing => "mailing",
            AddressType::Residential => "residential",
        }
    }
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strings outside the enumeration are rejected at the boundary.
impl TryFrom<&str> for AddressType {
    type Error = AppError;

    fn try_from(s: &str) -> AppResult<Self> {
        match s {
            "unknown" => Ok(AddressType::Unknown),
            "home" => Ok(AddressType::Home),
            "work" => Ok(AddressType::Work),
            "mailing" => Ok(AddressType::Mailing),
            "residential" => Ok(AddressType::Residential),
            other => Err(AppError::bad_request(format!(
                "Unknown address type: {}",
                other
            ))),
        }
    }
}

/// Employee domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub company_id: i32,
    pub department_id: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Employee {
    pub fn is_modified(&self) -> bool {
        self.modified_at != never_modified()
    }
}

/// Typed address owned directly by one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeAddress {
    pub employee_id: i32,
    pub address_type: AddressType,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

// =============================================================================
// DTOs and conversions
// =============================================================================

/// Employee creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    #[schema(example = "John")]
    pub first_name: String,
    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    #[schema(example = "Whyne")]
    pub last_name: String,
    #[schema(example = "1965-05-31")]
    pub birth_date: NaiveDate,
    #[validate(range(min = 1, message = "company_id must be positive"))]
    #[schema(example = 1)]
    pub company_id: i32,
    #[validate(range(min = 1, message = "department_id must be positive"))]
    #[schema(example = 1)]
    pub department_id: i32,
}

/// Employee update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployee {
    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[validate(range(min = 1, message = "department_id must be positive"))]
    pub department_id: Option<i32>,
}

/// Upsert request for one typed employee address
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertEmployeeAddress {
    /// Address text for the given slot
    #[validate(length(min = 1, max = 512, message = "Address must be 1-512 characters"))]
    #[schema(example = "123 Residential St")]
    pub address: String,
}

/// Employee response (wire shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Whyne")]
    pub last_name: String,
    #[schema(example = "1965-05-31")]
    pub birth_date: NaiveDate,
    #[schema(example = 1)]
    pub company_id: i32,
    #[schema(example = 1)]
    pub department_id: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            birth_date: employee.birth_date,
            company_id: employee.company_id,
            department_id: employee.department_id,
            created_at: employee.created_at,
            modified_at: employee.modified_at,
        }
    }
}

/// Employee address response (wire shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeAddressResponse {
    #[schema(example = 1)]
    pub employee_id: i32,
    #[schema(example = "residential")]
    pub address_type: AddressType,
    #[schema(example = "123 Residential St")]
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<EmployeeAddress> for EmployeeAddressResponse {
    fn from(address: EmployeeAddress) -> Self {
        Self {
            employee_id: address.employee_id,
            address_type: address.address_type,
            address: address.address,
            created_at: address.created_at,
            modified_at: address.modified_at,
        }
    }
}
