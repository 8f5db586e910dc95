//! Department handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{to_responses, CreateDepartment, DepartmentResponse, UpdateDepartment};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Create department routes
pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/:id",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}

/// List departments (paginated)
#[utoipa::path(
    get,
    path = "/api/v3/departments",
    tag = "Departments",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of departments", body = [DepartmentResponse],
            headers(("X-Pagination" = String, description = "Pagination metadata"))),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_departments(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Paginated<DepartmentResponse>> {
    let (departments, total) = state
        .department_service
        .list_departments(params.clone())
        .await?;

    Ok(Paginated::from_params(
        to_responses(departments),
        &params,
        total,
    ))
}

/// Get department by ID
#[utoipa::path(
    get,
    path = "/api/v3/departments/{id}",
    tag = "Departments",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DepartmentResponse>> {
    let department = state.department_service.get_department(id).await?;

    Ok(Json(DepartmentResponse::from(department)))
}

/// Create a new department
#[utoipa::path(
    post,
    path = "/api/v3/departments",
    tag = "Departments",
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 400, description = "Validation error or unknown company")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_department(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDepartment>,
) -> AppResult<Created<DepartmentResponse>> {
    let department = state.department_service.create_department(payload).await?;

    Ok(Created(DepartmentResponse::from(department)))
}

/// Update department details
#[utoipa::path(
    put,
    path = "/api/v3/departments/{id}",
    tag = "Departments",
    params(("id" = i32, Path, description = "Department ID")),
    request_body = UpdateDepartment,
    responses(
        (status = 200, description = "Department updated", body = DepartmentResponse),
        (status = 404, description = "Department not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateDepartment>,
) -> AppResult<Json<DepartmentResponse>> {
    let department = state
        .department_service
        .update_department(id, payload)
        .await?;

    Ok(Json(DepartmentResponse::from(department)))
}

/// Delete department
#[utoipa::path(
    delete,
    path = "/api/v3/departments/{id}",
    tag = "Departments",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 400, description = "Employees still reference it"),
        (status = 404, description = "Department not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.department_service.delete_department(id).await?;

    Ok(NoContent)
}
