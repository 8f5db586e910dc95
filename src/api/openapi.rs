//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    address_handler, auth_handler, company_handler, department_handler, employee_handler,
};
use crate::domain::{
    AddressRelationResponse, AddressResponse, AddressType, CompanyResponse, CreateAddress,
    CreateCompany, CreateDepartment, CreateEmployee, DepartmentResponse, EmployeeAddressResponse,
    EmployeeResponse, EntityKind, LinkAddress, RegisterUser, UpdateAddress, UpdateCompany,
    UpdateDepartment, UpdateEmployee, UpsertEmployeeAddress, UserResponse,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Organization Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Organization Directory API",
        version = "3.0.0",
        description = "Company, department, employee and address directory with JWT authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Company endpoints
        company_handler::list_companies,
        company_handler::get_company,
        company_handler::create_company,
        company_handler::update_company,
        company_handler::delete_company,
        company_handler::list_company_departments,
        // Department endpoints
        department_handler::list_departments,
        department_handler::get_department,
        department_handler::create_department,
        department_handler::update_department,
        department_handler::delete_department,
        // Employee endpoints
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::create_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
        employee_handler::list_employee_addresses,
        employee_handler::get_employee_address,
        employee_handler::add_employee_address,
        employee_handler::upsert_employee_address,
        employee_handler::remove_employee_address,
        // Address endpoints
        address_handler::list_addresses,
        address_handler::get_address,
        address_handler::create_address,
        address_handler::update_address,
        address_handler::delete_address,
        address_handler::link_address,
        address_handler::list_relations,
        address_handler::unlink_address,
        address_handler::addresses_by_owner,
    ),
    components(
        schemas(
            // Domain types
            EntityKind,
            AddressType,
            CompanyResponse,
            CreateCompany,
            UpdateCompany,
            DepartmentResponse,
            CreateDepartment,
            UpdateDepartment,
            EmployeeResponse,
            CreateEmployee,
            UpdateEmployee,
            EmployeeAddressResponse,
            UpsertEmployeeAddress,
            AddressResponse,
            CreateAddress,
            UpdateAddress,
            LinkAddress,
            AddressRelationResponse,
            UserResponse,
            RegisterUser,
            // Auth types
            auth_handler::LoginRequest,
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Companies", description = "Company directory operations"),
        (name = "Departments", description = "Department directory operations"),
        (name = "Employees", description = "Employee directory and typed address slots"),
        (name = "Addresses", description = "Shared address pool and polymorphic relations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/v3/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
