//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{ServiceLinkDto, ServiceTypeDto};

/// Resolved link response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLinkResponse {
    pub path: String,
    pub label: String,
    pub service_type: String,
}

impl From<ServiceLinkDto> for ServiceLinkResponse {
    fn from(dto: ServiceLinkDto) -> Self {
        Self {
            path: dto.path,
            label: dto.label,
            service_type: dto.service_type,
        }
    }
}

/// Batch link response
#[derive(Debug, Serialize)]
pub struct ServiceLinksResponse {
    pub links: Vec<ServiceLinkResponse>,
}

/// CTA label response
#[derive(Debug, Serialize)]
pub struct CtaLabelResponse {
    pub label: String,
}

/// Service type catalogue entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeResponse {
    pub code: String,
    pub path_prefix: String,
    pub label: String,
}

impl From<ServiceTypeDto> for ServiceTypeResponse {
    fn from(dto: ServiceTypeDto) -> Self {
        Self {
            code: dto.code,
            path_prefix: dto.path_prefix,
            label: dto.label,
        }
    }
}
