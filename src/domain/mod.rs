//! # Domain Layer
//!
//! Core rules for turning marketplace items into navigation targets.
//! Independent of the HTTP layer and of any I/O.
//!
//! ## Structure
//!
//! - **entities**: the service descriptor input record
//! - **value_objects**: the closed service type classifier
//! - **services**: path and label resolution

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
