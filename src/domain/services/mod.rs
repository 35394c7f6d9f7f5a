//! # Domain Services
//!
//! Pure business rules that operate on domain entities.
//!
//! ## Services
//!
//! - **service_route**: detail-page path and call-to-action resolution

mod service_route;

pub use service_route::*;
