//! Address pool and relation handlers.
//!
//! Addresses are a shared pool; relations attach them to companies,
//! departments or employees through the entity kind discriminator.
//! `/addresses/by-owner/{kind}/{id}` is the reverse lookup.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{
    to_responses, AddressOwner, AddressRelationResponse, AddressResponse, CreateAddress,
    EntityKind, LinkAddress, UpdateAddress,
};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Create address routes
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses).post(create_address))
        .route("/by-owner/:entity_kind/:entity_id", get(addresses_by_owner))
        .route(
            "/:id",
            get(get_address).put(update_address).delete(delete_address),
        )
        .route("/:id/relations", get(list_relations).post(link_address))
        .route(
            "/:id/relations/:entity_kind/:entity_id",
            axum::routing::delete(unlink_address),
        )
}

/// List pool addresses (paginated)
#[utoipa::path(
    get,
    path = "/api/v3/addresses",
    tag = "Addresses",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of addresses", body = [AddressResponse],
            headers(("X-Pagination" = String, description = "Pagination metadata"))),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Paginated<AddressResponse>> {
    let (addresses, total) = state.address_service.list_addresses(params.clone()).await?;

    Ok(Paginated::from_params(
        to_responses(addresses),
        &params,
        total,
    ))
}

/// Get address by ID
#[utoipa::path(
    get,
    path = "/api/v3/addresses/{id}",
    tag = "Addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Address found", body = AddressResponse),
        (status = 404, description = "Address not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AddressResponse>> {
    let address = state.address_service.get_address(id).await?;

    Ok(Json(AddressResponse::from(address)))
}

/// Create a new pool address
#[utoipa::path(
    post,
    path = "/api/v3/addresses",
    tag = "Addresses",
    request_body = CreateAddress,
    responses(
        (status = 201, description = "Address created", body = AddressResponse),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_address(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAddress>,
) -> AppResult<Created<AddressResponse>> {
    let address = state.address_service.create_address(payload).await?;

    Ok(Created(AddressResponse::from(address)))
}

/// Update the address text
#[utoipa::path(
    put,
    path = "/api/v3/addresses/{id}",
    tag = "Addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    request_body = UpdateAddress,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 404, description = "Address not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateAddress>,
) -> AppResult<Json<AddressResponse>> {
    let address = state.address_service.update_address(id, payload).await?;

    Ok(Json(AddressResponse::from(address)))
}

/// Delete address and its relations
#[utoipa::path(
    delete,
    path = "/api/v3/addresses/{id}",
    tag = "Addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Address not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.address_service.delete_address(id).await?;

    Ok(NoContent)
}

/// Link an address to an owning entity
#[utoipa::path(
    post,
    path = "/api/v3/addresses/{id}/relations",
    tag = "Addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    request_body = LinkAddress,
    responses(
        (status = 201, description = "Link created", body = AddressRelationResponse),
        (status = 400, description = "Owner does not exist"),
        (status = 404, description = "Address not found"),
        (status = 409, description = "Link already exists")
    ),
    security(("bearer_auth" = []))
)]
pub async fn link_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<LinkAddress>,
) -> AppResult<Created<AddressRelationResponse>> {
    let relation = state
        .address_service
        .link(id, AddressOwner::from(&payload))
        .await?;

    Ok(Created(AddressRelationResponse::from(relation)))
}

/// List every owner linked to one address
#[utoipa::path(
    get,
    path = "/api/v3/addresses/{id}/relations",
    tag = "Addresses",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Relations of the address", body = [AddressRelationResponse]),
        (status = 404, description = "Address not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_relations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<AddressRelationResponse>>> {
    let relations = state.address_service.relations_of(id).await?;

    Ok(Json(to_responses(relations)))
}

/// Remove one link
#[utoipa::path(
    delete,
    path = "/api/v3/addresses/{id}/relations/{entity_kind}/{entity_id}",
    tag = "Addresses",
    params(
        ("id" = Uuid, Path, description = "Address ID"),
        ("entity_kind" = String, Path, description = "Owner kind (company, department, employee)"),
        ("entity_id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 204, description = "Link removed"),
        (status = 400, description = "Unknown entity kind"),
        (status = 404, description = "Link not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn unlink_address(
    State(state): State<AppState>,
    Path((id, entity_kind, entity_id)): Path<(Uuid, String, i32)>,
) -> AppResult<NoContent> {
    let kind = EntityKind::try_from(entity_kind.as_str())?;
    state
        .address_service
        .unlink(id, AddressOwner::new(kind, entity_id))
        .await?;

    Ok(NoContent)
}

/// List every address linked to one owner
#[utoipa::path(
    get,
    path = "/api/v3/addresses/by-owner/{entity_kind}/{entity_id}",
    tag = "Addresses",
    params(
        ("entity_kind" = String, Path, description = "Owner kind (company, department, employee)"),
        ("entity_id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Addresses of the owner", body = [AddressResponse]),
        (status = 400, description = "Unknown entity kind"),
        (status = 404, description = "Owner not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn addresses_by_owner(
    State(state): State<AppState>,
    Path((entity_kind, entity_id)): Path<(String, i32)>,
) -> AppResult<Json<Vec<AddressResponse>>> {
    let kind = EntityKind::try_from(entity_kind.as_str())?;
    let addresses = state
        .address_service
        .addresses_of(AddressOwner::new(kind, entity_id))
        .await?;

    Ok(Json(to_responses(addresses)))
}
