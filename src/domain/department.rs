//! Department aggregate and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::never_modified;

/// Department domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub company_id: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Department {
    pub fn is_modified(&self) -> bool {
        self.modified_at != never_modified()
    }
}

/// Department creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDepartment {
    /// Department name
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    #[schema(example = "Engineering")]
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Owning company id
    #[validate(range(min = 1, message = "company_id must be positive"))]
    #[schema(example = 1)]
    pub company_id: i32,
}

/// Department update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateDepartment {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Department response (wire shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepartmentResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Engineering")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 1)]
    pub company_id: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            description: department.description,
            company_id: department.company_id,
            created_at: department.created_at,
            modified_at: department.modified_at,
        }
    }
}
