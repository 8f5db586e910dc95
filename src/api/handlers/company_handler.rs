//! Company handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{
    to_responses, CompanyResponse, CreateCompany, DepartmentResponse, UpdateCompany,
};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Create company routes
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route(
            "/:id",
            get(get_company).put(update_company).delete(delete_company),
        )
        .route("/:id/departments", get(list_company_departments))
}

/// List companies (paginated)
#[utoipa::path(
    get,
    path = "/api/v3/companies",
    tag = "Companies",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of companies", body = [CompanyResponse],
            headers(("X-Pagination" = String, description = "Pagination metadata"))),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Paginated<CompanyResponse>> {
    let (companies, total) = state.company_service.list_companies(params.clone()).await?;

    Ok(Paginated::from_params(
        to_responses(companies),
        &params,
        total,
    ))
}

/// Get company by ID
#[utoipa::path(
    get,
    path = "/api/v3/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company found", body = CompanyResponse),
        (status = 404, description = "Company not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CompanyResponse>> {
    let company = state.company_service.get_company(id).await?;

    Ok(Json(CompanyResponse::from(company)))
}

/// Create a new company
#[utoipa::path(
    post,
    path = "/api/v3/companies",
    tag = "Companies",
    request_body = CreateCompany,
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCompany>,
) -> AppResult<Created<CompanyResponse>> {
    let company = state.company_service.create_company(payload).await?;

    Ok(Created(CompanyResponse::from(company)))
}

/// Update company details
#[utoipa::path(
    put,
    path = "/api/v3/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    request_body = UpdateCompany,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 404, description = "Company not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCompany>,
) -> AppResult<Json<CompanyResponse>> {
    let company = state.company_service.update_company(id, payload).await?;

    Ok(Json(CompanyResponse::from(company)))
}

/// Delete company
#[utoipa::path(
    delete,
    path = "/api/v3/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 400, description = "Departments or employees still reference it"),
        (status = 404, description = "Company not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.company_service.delete_company(id).await?;

    Ok(NoContent)
}

/// List departments of a company
#[utoipa::path(
    get,
    path = "/api/v3/companies/{id}/departments",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Departments of the company", body = [DepartmentResponse]),
        (status = 404, description = "Company not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_company_departments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<DepartmentResponse>>> {
    let departments = state
        .department_service
        .list_company_departments(id)
        .await?;

    Ok(Json(to_responses(departments)))
}
