//! API surface tests.
//!
//! Exercises the wire-facing pieces that don't need a database: error
//! status mapping, response helpers, the pagination header, and the
//! DTO-to-response conversions.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use orgdir_api::domain::{
    never_modified, to_responses, Address, AddressOwner, AddressRelation,
    AddressRelationResponse, AddressResponse, AddressType, Company, CompanyResponse, Employee,
    EmployeeResponse, EntityKind,
};
use orgdir_api::errors::AppError;
use orgdir_api::types::{Created, MessageResponse, NoContent, Paginated};

// =============================================================================
// Error Status Mapping
// =============================================================================

#[tokio::test]
async fn test_app_error_status_codes() {
    assert_eq!(
        AppError::NotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::InvalidCredentials.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::conflict("Company").into_response().status(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        AppError::validation("bad field").into_response().status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::bad_request("no such owner")
            .into_response()
            .status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::internal("boom").into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// Response Helpers
// =============================================================================

#[tokio::test]
async fn test_created_and_no_content_statuses() {
    let created = Created(MessageResponse::new("made")).into_response();
    assert_eq!(created.status(), StatusCode::CREATED);

    let no_content = NoContent.into_response();
    assert_eq!(no_content.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_paginated_response_carries_header() {
    let page = Paginated::new(vec!["a", "b"], 2, 10, 31);
    let response = page.into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let header = response
        .headers()
        .get("X-Pagination")
        .expect("pagination header must be present")
        .to_str()
        .unwrap();
    let meta: serde_json::Value = serde_json::from_str(header).unwrap();
    assert_eq!(meta["page"], 2);
    assert_eq!(meta["per_page"], 10);
    assert_eq!(meta["total"], 31);
    assert_eq!(meta["total_pages"], 4);
}

// =============================================================================
// Discriminator Serialization
// =============================================================================

#[tokio::test]
async fn test_entity_kind_wire_strings() {
    assert_eq!(
        serde_json::to_string(&EntityKind::Company).unwrap(),
        "\"company\""
    );
    assert_eq!(EntityKind::try_from("department").unwrap(), EntityKind::Department);
    assert!(EntityKind::try_from("planet").is_err());
}

#[tokio::test]
async fn test_address_type_wire_strings() {
    assert_eq!(
        serde_json::to_string(&AddressType::Residential).unwrap(),
        "\"residential\""
    );
    assert_eq!(AddressType::try_from("home").unwrap(), AddressType::Home);
    // Case-sensitive by design of the closed set
    assert!(AddressType::try_from("HOME").is_err());
}

// =============================================================================
// DTO Round-Trips
// =============================================================================

#[tokio::test]
async fn test_company_response_preserves_fields() {
    let company = Company {
        id: 5,
        name: "Acme".to_string(),
        description: Some("Widgets".to_string()),
        created_at: Utc::now(),
        modified_at: never_modified(),
    };

    let response = CompanyResponse::from(company.clone());
    assert_eq!(response.id, company.id);
    assert_eq!(response.name, company.name);
    assert_eq!(response.description, company.description);
    assert_eq!(response.created_at, company.created_at);
    assert_eq!(response.modified_at, company.modified_at);
}

#[tokio::test]
async fn test_employee_response_preserves_fields() {
    let employee = Employee {
        id: 9,
        first_name: "John".to_string(),
        last_name: "Winchester".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
        company_id: 1,
        department_id: 2,
        created_at: Utc::now(),
        modified_at: never_modified(),
    };

    let response = EmployeeResponse::from(employee.clone());
    assert_eq!(response.id, employee.id);
    assert_eq!(response.birth_date, employee.birth_date);
    assert_eq!(response.company_id, employee.company_id);
    assert_eq!(response.department_id, employee.department_id);
}

#[tokio::test]
async fn test_relation_response_flattens_owner() {
    let relation = AddressRelation {
        address_id: Uuid::new_v4(),
        owner: AddressOwner::Department(3),
    };

    let response = AddressRelationResponse::from(relation.clone());
    assert_eq!(response.address_id, relation.address_id);
    assert_eq!(response.entity_kind, EntityKind::Department);
    assert_eq!(response.entity_id, 3);
}

#[tokio::test]
async fn test_batch_conversion_keeps_order() {
    let addresses = vec![
        Address::new("1 First".to_string()),
        Address::new("2 Second".to_string()),
    ];
    let ids: Vec<Uuid> = addresses.iter().map(|a| a.id).collect();

    let responses: Vec<AddressResponse> = to_responses(addresses);
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].id, ids[0]);
    assert_eq!(responses[1].id, ids[1]);
    assert_eq!(responses[1].full_address, "2 Second");
}

#[tokio::test]
async fn test_new_address_starts_unmodified() {
    let address = Address::new("1 Main Street".to_string());
    assert!(!address.is_modified());
    assert_eq!(address.modified_at, never_modified());
}
