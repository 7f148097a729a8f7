//! Shared entity contract
//!
//! Every Collection+JSON object implements [`Entity`]: it can be built from a
//! JSON mapping, rendered back to a JSON value and compared structurally.

use super::{ModelError, ModelResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// Contract shared by every Collection+JSON entity.
///
/// Equality is structural: two entities of the same kind are equal when every
/// declared field compares equal, containers included.
pub trait Entity: Sized + Clone + PartialEq + fmt::Debug {
    /// Entity kind, used in error messages
    const KIND: &'static str;

    /// Build the entity from a mapping of its fields
    fn from_fields(fields: Map<String, Value>) -> ModelResult<Self>;

    /// Render the entity as a JSON value
    fn to_value(&self) -> Value;

    /// The `name` attribute, for entities that carry one
    fn name(&self) -> Option<&str> {
        None
    }

    /// The `rel` attribute, for entities that carry one
    fn rel(&self) -> Option<&str> {
        None
    }

    /// Build the entity from an arbitrary JSON value, which must be a mapping
    fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            _ => Err(ModelError::TypeMismatch {
                field: Self::KIND.to_string(),
                expected: "object",
            }),
        }
    }
}

/// Build a serde-derived entity from its mapping, translating serde's
/// missing/unknown field reports into the matching [`ModelError`].
pub(crate) fn deserialize_fields<T: DeserializeOwned>(
    entity: &'static str,
    fields: Map<String, Value>,
) -> ModelResult<T> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| serde_error(entity, &e))
}

/// Value form of a serde-derived entity. Leaf entities hold only strings and
/// JSON values, which always serialize.
pub(crate) fn serialize_fields<T: Serialize>(entity: &T) -> Value {
    serde_json::to_value(entity).unwrap_or(Value::Null)
}

fn serde_error(entity: &'static str, err: &serde_json::Error) -> ModelError {
    let message = err.to_string();
    if let Some(field) = quoted_after(&message, "missing field ") {
        ModelError::MissingField { entity, field }
    } else if let Some(field) = quoted_after(&message, "unknown field ") {
        ModelError::UnexpectedField { entity, field }
    } else {
        ModelError::InvalidField {
            entity,
            reason: message,
        }
    }
}

/// The first backquoted word following `prefix`, as serde formats field names
fn quoted_after(message: &str, prefix: &str) -> Option<String> {
    let rest = message.strip_prefix(prefix)?.strip_prefix('`')?;
    rest.split('`').next().map(str::to_string)
}

/// Deserialize a field that may be explicitly `null`, keeping the `null`.
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub(crate) fn explicit_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <Value as serde::Deserialize>::deserialize(deserializer).map(Some)
}

/// Field extractor used by the mapping constructors of composite entities.
///
/// Each accessor removes the key it reads; [`Fields::finish`] rejects whatever
/// is left, so a mapping must only carry declared keys.
pub(crate) struct Fields {
    entity: &'static str,
    map: Map<String, Value>,
}

impl Fields {
    pub(crate) fn new(entity: &'static str, map: Map<String, Value>) -> Self {
        Self { entity, map }
    }

    /// Take a mandatory string field. `null` is a type mismatch, as for serde.
    pub(crate) fn required_string(&mut self, key: &'static str) -> ModelResult<String> {
        match self.map.remove(key) {
            None => Err(ModelError::MissingField {
                entity: self.entity,
                field: key.to_string(),
            }),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ModelError::TypeMismatch {
                field: format!("{}.{}", self.entity, key),
                expected: "string",
            }),
        }
    }

    pub(crate) fn optional_string(&mut self, key: &'static str) -> ModelResult<Option<String>> {
        match self.map.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ModelError::TypeMismatch {
                field: format!("{}.{}", self.entity, key),
                expected: "string",
            }),
        }
    }

    /// Take a raw field for coercion, `Value::Null` when absent
    pub(crate) fn take(&mut self, key: &'static str) -> Value {
        self.map.remove(key).unwrap_or(Value::Null)
    }

    pub(crate) fn finish(self) -> ModelResult<()> {
        match self.map.into_iter().next() {
            None => Ok(()),
            Some((field, _)) => Err(ModelError::UnexpectedField {
                entity: self.entity,
                field,
            }),
        }
    }
}

/// Implements `serde::Serialize` and `serde::Deserialize` for an entity
/// through its value form, so serde users get the same coercion rules.
macro_rules! impl_serde_via_value {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&$crate::models::Entity::to_value(self), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::models::Entity>::from_value(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_serde_via_value;
