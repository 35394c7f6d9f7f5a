//! Service Link Handlers

use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CtaLabelQuery, ResolveLinksRequest};
use crate::application::dto::response::{
    CtaLabelResponse, ServiceLinkResponse, ServiceLinksResponse, ServiceTypeResponse,
};
use crate::application::services::LinkError;
use crate::domain::ServiceDescriptor;
use crate::presentation::http::extractors::ApiJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Resolve the detail link for one service
pub async fn resolve_link(
    State(state): State<AppState>,
    ApiJson(descriptor): ApiJson<ServiceDescriptor>,
) -> Json<ServiceLinkResponse> {
    Json(state.links.resolve(&descriptor).into())
}

/// Resolve detail links for a batch of services
pub async fn resolve_links(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ResolveLinksRequest>,
) -> Result<Json<ServiceLinksResponse>, AppError> {
    body.validate()?;

    let links = state
        .links
        .resolve_batch(&body.services)
        .map_err(|e: LinkError| AppError::BadRequest(e.to_string()))?;

    tracing::debug!(count = links.len(), "Resolved service link batch");

    Ok(Json(ServiceLinksResponse {
        links: links.into_iter().map(ServiceLinkResponse::from).collect(),
    }))
}

/// Get the call-to-action label for a service type
pub async fn get_cta_label(
    State(state): State<AppState>,
    Query(query): Query<CtaLabelQuery>,
) -> Json<CtaLabelResponse> {
    Json(CtaLabelResponse {
        label: state.links.cta_label(query.service_type.as_deref()).to_string(),
    })
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// List the known service types with their route prefix and label
pub async fn list_service_types(State(state): State<AppState>) -> Json<Vec<ServiceTypeResponse>> {
    Json(
        state
            .links
            .catalogue()
            .into_iter()
            .map(ServiceTypeResponse::from)
            .collect(),
    )
}
