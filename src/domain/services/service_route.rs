//! Service route resolution.
//!
//! Derives the detail-page path and call-to-action label for a marketplace
//! item. Both operations are total: missing or unusable descriptor fields
//! degrade to fixed fallbacks so that a listing card can always render.

use serde::Serialize;

use crate::domain::entities::ServiceDescriptor;
use crate::domain::value_objects::{ServiceType, DEFAULT_TYPE_CODE};

/// Resolved navigation target for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLink {
    pub path: String,
    pub label: &'static str,
    pub service_type: ServiceType,
}

/// Resolve the canonical detail-page path.
///
/// The identifier segment is not URL-encoded. A descriptor without any
/// identifier yields a path ending in the bare prefix (e.g. `/sessions/`).
pub fn resolve_detail_path(descriptor: &ServiceDescriptor) -> String {
    let service_type = ServiceType::classify(selected_type_code(descriptor));
    let identifier = descriptor.identifier().unwrap_or_default();

    format!("{}{}", service_type.path_prefix(), identifier)
}

/// Resolve the call-to-action label for a classifier.
pub fn resolve_cta_label(classifier: Option<&str>) -> &'static str {
    classifier
        .map(ServiceType::classify)
        .unwrap_or(ServiceType::Other)
        .cta_label()
}

/// Resolve path and label from the same selected type code.
pub fn resolve_link(descriptor: &ServiceDescriptor) -> ServiceLink {
    let code = selected_type_code(descriptor);

    ServiceLink {
        path: resolve_detail_path(descriptor),
        label: resolve_cta_label(Some(code)),
        service_type: ServiceType::classify(code),
    }
}

fn selected_type_code(descriptor: &ServiceDescriptor) -> &str {
    descriptor.type_code().unwrap_or(DEFAULT_TYPE_CODE)
}
