//! Company aggregate and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::never_modified;

/// Company domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Company {
    pub fn is_modified(&self) -> bool {
        self.modified_at != never_modified()
    }
}

/// Company creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCompany {
    /// Company name
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    #[schema(example = "Initech")]
    pub name: String,
    /// Optional description
    #[schema(example = "Printer software")]
    pub description: Option<String>,
}

/// Company update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCompany {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    #[schema(example = "Initech LLC")]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Company response (wire shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Initech")]
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            description: company.description,
            created_at: company.created_at,
            modified_at: company.modified_at,
        }
    }
}
