//! Service descriptor.
//!
//! A loosely-shaped record identifying one marketplace item as it arrives
//! from upstream listing data. Every field is optional and decoding never
//! rejects a mistyped field: it simply reads as absent. Only the record
//! itself must be a JSON object.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Opaque item identifier, either textual or numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceIdentifier {
    Text(String),
    Number(Number),
}

impl ServiceIdentifier {
    /// Textual form used in paths. Numbers keep their JSON representation.
    pub fn as_segment(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl From<&str> for ServiceIdentifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ServiceIdentifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ServiceIdentifier {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl std::fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_segment())
    }
}

/// Nested service type reference (`serviceType: { name, code }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTypeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Input record describing one marketplace service, session or workshop.
///
/// Decodes from a JSON object only. Arrays, strings and numbers are
/// rejected rather than matched against field positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct ServiceDescriptor {
    /// Opaque identifier, lowest identifier precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ServiceIdentifier>,

    /// Human-readable identifier, highest identifier precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Opaque public identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_uuid: Option<String>,

    /// Nested type reference, consulted after `service_type_code`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceTypeRef>,

    /// Flat classifier, highest type precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type_code: Option<String>,

    /// Display string, never used for routing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type_display: Option<String>,
}

impl ServiceDescriptor {
    /// Decode one batch item. Anything other than an object yields an
    /// empty descriptor, which still resolves to a fallback link.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => map.into(),
            _ => Self::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ServiceIdentifier>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_public_uuid(mut self, public_uuid: impl Into<String>) -> Self {
        self.public_uuid = Some(public_uuid.into());
        self
    }

    pub fn with_service_type_code(mut self, code: impl Into<String>) -> Self {
        self.service_type_code = Some(code.into());
        self
    }

    pub fn with_service_type(mut self, service_type: ServiceTypeRef) -> Self {
        self.service_type = Some(service_type);
        self
    }

    /// First non-empty of `slug`, `public_uuid`, `id`.
    pub fn identifier(&self) -> Option<Cow<'_, str>> {
        non_empty(self.slug.as_deref())
            .or_else(|| non_empty(self.public_uuid.as_deref()))
            .map(Cow::Borrowed)
            .or_else(|| {
                self.id
                    .as_ref()
                    .filter(|id| !id.is_empty())
                    .map(ServiceIdentifier::as_segment)
            })
    }

    /// First non-empty of `service_type_code`, `service_type.code`,
    /// `service_type.name`. Not normalized.
    pub fn type_code(&self) -> Option<&str> {
        let nested = self.service_type.as_ref();
        non_empty(self.service_type_code.as_deref())
            .or_else(|| nested.and_then(|t| non_empty(t.code.as_deref())))
            .or_else(|| nested.and_then(|t| non_empty(t.name.as_deref())))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl From<Map<String, Value>> for ServiceDescriptor {
    fn from(map: Map<String, Value>) -> Self {
        let string = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            id: map.get("id").and_then(identifier_from_value),
            slug: string("slug"),
            public_uuid: string("publicUuid"),
            service_type: map.get("serviceType").and_then(service_type_from_value),
            service_type_code: string("serviceTypeCode"),
            service_type_display: string("serviceTypeDisplay"),
        }
    }
}

fn identifier_from_value(value: &Value) -> Option<ServiceIdentifier> {
    match value {
        Value::String(s) => Some(ServiceIdentifier::Text(s.clone())),
        Value::Number(n) => Some(ServiceIdentifier::Number(n.clone())),
        _ => None,
    }
}

fn service_type_from_value(value: &Value) -> Option<ServiceTypeRef> {
    let map = value.as_object()?;
    let field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

    Some(ServiceTypeRef {
        name: field("name"),
        code: field("code"),
    })
}
