//! Employee handlers, including the typed address slot endpoints.
//!
//! The slot endpoints distinguish POST (strict insert, 409 when the slot is
//! taken) from PUT (upsert in place), both keyed on the address type in the
//! path.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{
    to_responses, AddressType, CreateEmployee, EmployeeAddressResponse, EmployeeResponse,
    UpdateEmployee, UpsertEmployeeAddress,
};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/:id/addresses", get(list_employee_addresses))
        .route(
            "/:id/addresses/:address_type",
            get(get_employee_address)
                .post(add_employee_address)
                .put(upsert_employee_address)
                .delete(remove_employee_address),
        )
}

/// List employees (paginated)
#[utoipa::path(
    get,
    path = "/api/v3/employees",
    tag = "Employees",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of employees", body = [EmployeeResponse],
            headers(("X-Pagination" = String, description = "Pagination metadata"))),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Paginated<EmployeeResponse>> {
    let (employees, total) = state.employee_service.list_employees(params.clone()).await?;

    Ok(Paginated::from_params(
        to_responses(employees),
        &params,
        total,
    ))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/v3/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.get_employee(id).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/v3/employees",
    tag = "Employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Validation error or unknown company/department")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployee>,
) -> AppResult<Created<EmployeeResponse>> {
    let employee = state.employee_service.create_employee(payload).await?;

    Ok(Created(EmployeeResponse::from(employee)))
}

/// Update employee details
#[utoipa::path(
    put,
    path = "/api/v3/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployee>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.update_employee(id, payload).await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Delete employee and its address slots
#[utoipa::path(
    delete,
    path = "/api/v3/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.employee_service.delete_employee(id).await?;

    Ok(NoContent)
}

/// List all typed address slots of an employee
#[utoipa::path(
    get,
    path = "/api/v3/employees/{id}/addresses",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Address slots", body = [EmployeeAddressResponse]),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_employee_addresses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<EmployeeAddressResponse>>> {
    let addresses = state.employee_service.list_employee_addresses(id).await?;

    Ok(Json(to_responses(addresses)))
}

/// Get one typed address slot
#[utoipa::path(
    get,
    path = "/api/v3/employees/{id}/addresses/{address_type}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID"),
        ("address_type" = String, Path, description = "Address type (home, work, mailing, residential, unknown)")
    ),
    responses(
        (status = 200, description = "Slot found", body = EmployeeAddressResponse),
        (status = 400, description = "Unknown address type"),
        (status = 404, description = "Slot empty or employee not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_employee_address(
    State(state): State<AppState>,
    Path((id, address_type)): Path<(i32, String)>,
) -> AppResult<Json<EmployeeAddressResponse>> {
    let address_type = AddressType::try_from(address_type.as_str())?;
    let address = state
        .employee_service
        .get_employee_address(id, address_type)
        .await?;

    Ok(Json(EmployeeAddressResponse::from(address)))
}

/// Fill an empty address slot (strict insert)
#[utoipa::path(
    post,
    path = "/api/v3/employees/{id}/addresses/{address_type}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID"),
        ("address_type" = String, Path, description = "Address type")
    ),
    request_body = UpsertEmployeeAddress,
    responses(
        (status = 201, description = "Slot filled", body = EmployeeAddressResponse),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Slot already taken")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_employee_address(
    State(state): State<AppState>,
    Path((id, address_type)): Path<(i32, String)>,
    ValidatedJson(payload): ValidatedJson<UpsertEmployeeAddress>,
) -> AppResult<Created<EmployeeAddressResponse>> {
    let address_type = AddressType::try_from(address_type.as_str())?;
    let address = state
        .employee_service
        .add_employee_address(id, address_type, payload.address)
        .await?;

    Ok(Created(EmployeeAddressResponse::from(address)))
}

/// Fill or overwrite an address slot in place
#[utoipa::path(
    put,
    path = "/api/v3/employees/{id}/addresses/{address_type}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID"),
        ("address_type" = String, Path, description = "Address type")
    ),
    request_body = UpsertEmployeeAddress,
    responses(
        (status = 200, description = "Slot upserted", body = EmployeeAddressResponse),
        (status = 404, description = "Employee not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn upsert_employee_address(
    State(state): State<AppState>,
    Path((id, address_type)): Path<(i32, String)>,
    ValidatedJson(payload): ValidatedJson<UpsertEmployeeAddress>,
) -> AppResult<Json<EmployeeAddressResponse>> {
    let address_type = AddressType::try_from(address_type.as_str())?;
    let address = state
        .employee_service
        .upsert_employee_address(id, address_type, payload.address)
        .await?;

    Ok(Json(EmployeeAddressResponse::from(address)))
}

/// Clear one address slot
#[utoipa::path(
    delete,
    path = "/api/v3/employees/{id}/addresses/{address_type}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID"),
        ("address_type" = String, Path, description = "Address type")
    ),
    responses(
        (status = 204, description = "Slot cleared"),
        (status = 404, description = "Slot already empty")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_employee_address(
    State(state): State<AppState>,
    Path((id, address_type)): Path<(i32, String)>,
) -> AppResult<NoContent> {
    let address_type = AddressType::try_from(address_type.as_str())?;
    state
        .employee_service
        .remove_employee_address(id, address_type)
        .await?;

    Ok(NoContent)
}
