//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::ServiceDescriptor;

/// Batch link resolution request
///
/// `services` must be an array. Items that are not objects resolve as
/// empty descriptors instead of failing the batch.
#[derive(Debug, Deserialize, Validate)]
#[serde(try_from = "Map<String, Value>")]
pub struct ResolveLinksRequest {
    #[validate(length(min = 1, message = "At least one service is required"))]
    pub services: Vec<ServiceDescriptor>,
}

impl TryFrom<Map<String, Value>> for ResolveLinksRequest {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        match map.remove("services") {
            Some(Value::Array(items)) => Ok(Self {
                services: items.into_iter().map(ServiceDescriptor::from_value).collect(),
            }),
            Some(_) => Err("`services` must be an array".into()),
            None => Err("missing field `services`".into()),
        }
    }
}

/// CTA label query (`?serviceType=workshop`)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaLabelQuery {
    pub service_type: Option<String>,
}
