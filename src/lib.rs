//! # Marketplace Links
//!
//! Detail-page path and call-to-action resolution for a wellness-practitioner
//! marketplace (sessions, workshops, courses, packages, bundles).
//!
//! The core is a pair of total functions in [`domain`]:
//! [`domain::resolve_detail_path`] and [`domain::resolve_cta_label`]. They
//! never fail; incomplete listing data degrades to fixed fallbacks. The rest
//! of the crate serves them over HTTP for renderers that cannot link the
//! library directly.
//!
//! ## Module Structure
//!
//! ```text
//! marketplace_links/
//! +-- config/         Layered settings
//! +-- domain/         Service descriptor, classifier, route resolution
//! +-- application/    Link service and DTOs
//! +-- infrastructure/ Prometheus metrics
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Error types
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - Metrics
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
