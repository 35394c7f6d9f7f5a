//! Service type classifier.
//!
//! The closed set of marketplace item kinds that get their own detail-page
//! route and call-to-action label. Anything outside the set falls into
//! [`ServiceType::Other`].

use serde::{Deserialize, Serialize};

/// Classifier used when a descriptor carries no type information at all.
pub const DEFAULT_TYPE_CODE: &str = "session";

/// Marketplace item kinds.
///
/// | code     | path prefix   | CTA label       |
/// |----------|---------------|-----------------|
/// | session  | `/sessions/`  | Book Session    |
/// | workshop | `/workshops/` | Reserve Spot    |
/// | course   | `/courses/`   | Start Journey   |
/// | package  | `/packages/`  | View Package    |
/// | bundle   | `/bundles/`   | View Bundle     |
/// | (other)  | `/services/`  | View Details    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// One-to-one or small group session with a practitioner
    Session,
    /// Scheduled workshop with limited spots
    Workshop,
    /// Multi-module course
    Course,
    /// Package of sessions sold together
    Package,
    /// Bundle of mixed services
    Bundle,
    /// Any classifier not in the table above
    Other,
}

impl ServiceType {
    /// Every classifier with a dedicated route, in table order.
    pub const KNOWN: [ServiceType; 5] = [
        Self::Session,
        Self::Workshop,
        Self::Course,
        Self::Package,
        Self::Bundle,
    ];

    /// Classify a raw type code. Matching is exact after lower-casing;
    /// surrounding whitespace is not stripped.
    pub fn classify(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "session" => Self::Session,
            "workshop" => Self::Workshop,
            "course" => Self::Course,
            "package" => Self::Package,
            "bundle" => Self::Bundle,
            _ => Self::Other,
        }
    }

    /// Canonical code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Workshop => "workshop",
            Self::Course => "course",
            Self::Package => "package",
            Self::Bundle => "bundle",
            Self::Other => "other",
        }
    }

    /// Detail-page path prefix, including both slashes.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Self::Session => "/sessions/",
            Self::Workshop => "/workshops/",
            Self::Course => "/courses/",
            Self::Package => "/packages/",
            Self::Bundle => "/bundles/",
            Self::Other => "/services/",
        }
    }

    /// Call-to-action button text.
    pub fn cta_label(&self) -> &'static str {
        match self {
            Self::Session => "Book Session",
            Self::Workshop => "Reserve Spot",
            Self::Course => "Start Journey",
            Self::Package => "View Package",
            Self::Bundle => "View Bundle",
            Self::Other => "View Details",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
