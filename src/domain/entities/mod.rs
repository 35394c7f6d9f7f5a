//! # Domain Entities
//!
//! Records describing marketplace items as they arrive from upstream
//! listing data.
//!
//! - **ServiceDescriptor**: optional-field record identifying one item

mod service;

pub use service::*;
