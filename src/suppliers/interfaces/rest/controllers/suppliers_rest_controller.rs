use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    routing::get,
};
use tracing::error;
use validator::Validate;

use crate::suppliers::{
    domain::{
        model::{
            entities::supplier::Supplier,
            enums::supplier_domain_error::SupplierDomainError,
            value_objects::{email::Email, phone::Phone, supplier_id::SupplierId},
        },
        services::supplier_service::SupplierService,
    },
    interfaces::rest::resources::{
        error_response_resource::{ErrorResponseResource, ValidationErrorResource},
        supplier_request_resource::SupplierRequestResource,
        supplier_resource::{EmailResource, PhoneResource, SupplierResource},
    },
};

type ErrorResponse = (StatusCode, Json<ErrorResponseResource>);

#[derive(Clone)]
pub struct SuppliersRestControllerState {
    pub supplier_service: Arc<dyn SupplierService>,
}

pub fn router(state: SuppliersRestControllerState) -> Router {
    Router::new()
        .route("/api/suppliers", get(list_suppliers).post(create_supplier))
        .route(
            "/api/suppliers/:id",
            get(get_supplier)
                .put(update_supplier)
                .delete(delete_supplier),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "suppliers",
    responses(
        (status = 200, description = "All suppliers", body = [SupplierResource]),
        (status = 404, description = "No suppliers stored", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_suppliers(
    State(state): State<SuppliersRestControllerState>,
) -> Result<Json<Vec<SupplierResource>>, ErrorResponse> {
    let suppliers = state
        .supplier_service
        .get_suppliers()
        .await
        .map_err(map_domain_error)?;

    if suppliers.is_empty() {
        return Err(not_found());
    }

    Ok(Json(suppliers.iter().map(to_resource).collect()))
}

#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    tag = "suppliers",
    params(("id" = String, Path, description = "Supplier identifier (UUID)")),
    responses(
        (status = 200, description = "Supplier found", body = SupplierResource),
        (status = 400, description = "Malformed supplier id", body = ErrorResponseResource),
        (status = 404, description = "Supplier not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn get_supplier(
    State(state): State<SuppliersRestControllerState>,
    Path(id): Path<String>,
) -> Result<Json<SupplierResource>, ErrorResponse> {
    let supplier = state
        .supplier_service
        .get_supplier(&parse_supplier_id(id)?)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(not_found)?;

    Ok(Json(to_resource(&supplier)))
}

#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = "suppliers",
    request_body = SupplierRequestResource,
    responses(
        (status = 201, description = "Supplier created", body = SupplierResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 409, description = "Supplier id already taken", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_supplier(
    State(state): State<SuppliersRestControllerState>,
    Json(request): Json<SupplierRequestResource>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<SupplierResource>), ErrorResponse>
{
    validate_request(&request)?;

    let id = request
        .id
        .map(SupplierId::from)
        .unwrap_or_else(SupplierId::new_random);
    let supplier = to_entity(id, request);

    state
        .supplier_service
        .insert_supplier(supplier.clone())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/suppliers/{id}"))],
        Json(to_resource(&supplier)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/suppliers/{id}",
    tag = "suppliers",
    params(("id" = String, Path, description = "Supplier identifier (UUID)")),
    request_body = SupplierRequestResource,
    responses(
        (status = 204, description = "Supplier replaced"),
        (status = 400, description = "Invalid payload or id mismatch", body = ErrorResponseResource),
        (status = 404, description = "Supplier not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn update_supplier(
    State(state): State<SuppliersRestControllerState>,
    Path(id): Path<String>,
    Json(request): Json<SupplierRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    let id = parse_supplier_id(id)?;
    validate_request(&request)?;

    if request.id.is_some_and(|body_id| body_id != id.value()) {
        return Err(map_domain_error(SupplierDomainError::InvalidRequest(
            "path id and body id differ".to_string(),
        )));
    }

    state
        .supplier_service
        .update_supplier(to_entity(id, request))
        .await
        .map_err(map_domain_error)?
        .ok_or_else(not_found)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = "suppliers",
    params(("id" = String, Path, description = "Supplier identifier (UUID)")),
    responses(
        (status = 200, description = "Supplier deleted", body = SupplierResource),
        (status = 400, description = "Malformed supplier id", body = ErrorResponseResource),
        (status = 404, description = "Supplier not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn delete_supplier(
    State(state): State<SuppliersRestControllerState>,
    Path(id): Path<String>,
) -> Result<Json<SupplierResource>, ErrorResponse> {
    let deleted = state
        .supplier_service
        .delete_supplier(&parse_supplier_id(id)?)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(not_found)?;

    Ok(Json(to_resource(&deleted)))
}

fn parse_supplier_id(value: String) -> Result<SupplierId, ErrorResponse> {
    SupplierId::new(value).map_err(map_domain_error)
}

fn validate_request(request: &SupplierRequestResource) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        map_domain_error(SupplierDomainError::InvalidRequest(
            validation_error.to_string(),
        ))
    })
}

fn to_entity(id: SupplierId, request: SupplierRequestResource) -> Supplier {
    Supplier::restore(
        id,
        request.first_name,
        request.last_name,
        request.activation_date,
        request
            .emails
            .into_iter()
            .map(|email| Email::new(email.email_address))
            .collect(),
        request
            .phones
            .into_iter()
            .map(|phone| Phone::new(phone.phone_number))
            .collect(),
    )
}

fn to_resource(supplier: &Supplier) -> SupplierResource {
    SupplierResource {
        id: supplier.id().value(),
        first_name: supplier.first_name().map(str::to_string),
        last_name: supplier.last_name().map(str::to_string),
        activation_date: supplier.activation_date(),
        is_active: supplier.is_active(),
        emails: supplier
            .emails()
            .iter()
            .map(|email| EmailResource {
                email_address: email.email_address().to_string(),
            })
            .collect(),
        phones: supplier
            .phones()
            .iter()
            .map(|phone| PhoneResource {
                phone_number: phone.phone_number().to_string(),
            })
            .collect(),
    }
}

fn not_found() -> ErrorResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponseResource {
            message: "supplier not found".to_string(),
            errors: Vec::new(),
        }),
    )
}

fn map_domain_error(error: SupplierDomainError) -> ErrorResponse {
    let status = match &error {
        SupplierDomainError::InvalidSupplierId
        | SupplierDomainError::InvalidRequest(_)
        | SupplierDomainError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        SupplierDomainError::DuplicateSupplierId => StatusCode::CONFLICT,
        SupplierDomainError::InfrastructureError(message) => {
            error!(%message, "supplier store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let errors = match &error {
        SupplierDomainError::ValidationFailed(failures) => failures
            .iter()
            .map(|failure| ValidationErrorResource {
                member_names: failure.member_names().to_vec(),
                error_message: failure.error_message().to_string(),
            })
            .collect(),
        _ => Vec::new(),
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
            errors,
        }),
    )
}
