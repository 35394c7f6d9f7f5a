//! Link Service
//!
//! Resolves marketplace items into detail-page links for listing cards,
//! singly or in batches.

use crate::domain::{resolve_cta_label, resolve_link, ServiceDescriptor, ServiceType};
use crate::infrastructure::metrics;

/// Link service trait defining link resolution operations.
pub trait LinkService: Send + Sync {
    /// Resolve one descriptor. Never fails.
    fn resolve(&self, descriptor: &ServiceDescriptor) -> ServiceLinkDto;

    /// Resolve a batch of descriptors, preserving order.
    fn resolve_batch(
        &self,
        descriptors: &[ServiceDescriptor],
    ) -> Result<Vec<ServiceLinkDto>, LinkError>;

    /// Call-to-action label for a raw classifier.
    fn cta_label(&self, classifier: Option<&str>) -> &'static str;

    /// All service types with their route prefix and label.
    fn catalogue(&self) -> Vec<ServiceTypeDto>;
}

/// Resolved link data transfer object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLinkDto {
    pub path: String,
    pub label: String,
    pub service_type: String,
}

/// Service type catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTypeDto {
    pub code: String,
    pub path_prefix: String,
    pub label: String,
}

impl From<ServiceType> for ServiceTypeDto {
    fn from(service_type: ServiceType) -> Self {
        Self {
            code: service_type.as_str().to_string(),
            path_prefix: service_type.path_prefix().to_string(),
            label: service_type.cta_label().to_string(),
        }
    }
}

/// Link service errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("At least one service is required")]
    EmptyBatch,

    #[error("Batch of {size} services exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },
}

/// Link service implementation.
pub struct LinkServiceImpl {
    max_batch_size: usize,
}

impl LinkServiceImpl {
    pub fn new(max_batch_size: usize) -> Self {
        Self { max_batch_size }
    }
}

impl LinkService for LinkServiceImpl {
    fn resolve(&self, descriptor: &ServiceDescriptor) -> ServiceLinkDto {
        let link = resolve_link(descriptor);

        if descriptor.identifier().is_none() {
            tracing::warn!(
                path = %link.path,
                "Service descriptor has no slug, public UUID or id; link has an empty segment"
            );
        }

        metrics::record_link_resolved(link.service_type.as_str());
        tracing::debug!(path = %link.path, service_type = %link.service_type, "Resolved service link");

        ServiceLinkDto {
            path: link.path,
            label: link.label.to_string(),
            service_type: link.service_type.as_str().to_string(),
        }
    }

    fn resolve_batch(
        &self,
        descriptors: &[ServiceDescriptor],
    ) -> Result<Vec<ServiceLinkDto>, LinkError> {
        if descriptors.is_empty() {
            return Err(LinkError::EmptyBatch);
        }
        if descriptors.len() > self.max_batch_size {
            return Err(LinkError::BatchTooLarge {
                size: descriptors.len(),
                max: self.max_batch_size,
            });
        }

        Ok(descriptors.iter().map(|d| self.resolve(d)).collect())
    }

    fn cta_label(&self, classifier: Option<&str>) -> &'static str {
        resolve_cta_label(classifier)
    }

    fn catalogue(&self) -> Vec<ServiceTypeDto> {
        ServiceType::KNOWN
            .into_iter()
            .chain(std::iter::once(ServiceType::Other))
            .map(ServiceTypeDto::from)
            .collect()
    }
}
