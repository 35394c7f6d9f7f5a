//! Application Services
//!
//! Services that coordinate domain operations for the HTTP layer.
//!
//! ## Available Services
//!
//! - **LinkService**: detail-page link and CTA label resolution

pub mod link_service;

pub use link_service::{LinkError, LinkService, LinkServiceImpl, ServiceLinkDto, ServiceTypeDto};
