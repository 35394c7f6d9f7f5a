//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **ServiceType**: closed classifier of marketplace item kinds

mod service_type;

pub use service_type::*;
