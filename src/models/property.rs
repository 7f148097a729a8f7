//! Field assignment coercion
//!
//! Entity constructors and setters route every typed or container-valued
//! field through these two functions. They are the only places where a raw
//! mapping is implicitly turned into a typed entity.

use super::{Array, Entity, Member, ModelError, ModelResult};
use serde_json::Value;

/// Coerce a value assigned to a single-entity field (`template`, `error`).
///
/// - `None` or a JSON `null` stores nothing
/// - a typed `T` is stored as-is
/// - a mapping is built into a `T`
/// - anything else fails with [`ModelError::TypeMismatch`]
pub fn assign_typed<T: Entity>(field: &str, value: Option<Member<T>>) -> ModelResult<Option<T>> {
    match value {
        None | Some(Member::Raw(Value::Null)) => Ok(None),
        Some(Member::Typed(entity)) => Ok(Some(entity)),
        Some(Member::Raw(Value::Object(fields))) => T::from_fields(fields).map(Some),
        Some(Member::Raw(_)) => Err(ModelError::TypeMismatch {
            field: field.to_string(),
            expected: T::KIND,
        }),
    }
}

/// Anything that can be assigned to a container-valued field
#[derive(Debug, Clone, PartialEq)]
pub enum ArraySource<T> {
    Null,
    Members(Vec<Member<T>>),
    Raw(Value),
}

impl<T> From<Vec<T>> for ArraySource<T> {
    fn from(entities: Vec<T>) -> Self {
        ArraySource::Members(entities.into_iter().map(Member::Typed).collect())
    }
}

impl<T> From<Vec<Member<T>>> for ArraySource<T> {
    fn from(members: Vec<Member<T>>) -> Self {
        ArraySource::Members(members)
    }
}

impl<T> From<Array<T>> for ArraySource<T> {
    fn from(array: Array<T>) -> Self {
        ArraySource::Members(array.into_iter().map(Member::Typed).collect())
    }
}

impl<T> From<Value> for ArraySource<T> {
    fn from(value: Value) -> Self {
        ArraySource::Raw(value)
    }
}

/// Coerce a value assigned to a container-valued field.
///
/// `null` yields an empty container; a sequence is validated element by
/// element (see [`Array::new`]); anything else is a type mismatch.
pub fn assign_array<T: Entity>(key: &str, source: ArraySource<T>) -> ModelResult<Array<T>> {
    match source {
        ArraySource::Null | ArraySource::Raw(Value::Null) => Ok(Array::empty(key)),
        ArraySource::Members(members) => Array::new(key, members),
        ArraySource::Raw(Value::Array(values)) => {
            Array::new(key, values.into_iter().map(Member::<T>::Raw))
        }
        ArraySource::Raw(_) => Err(ModelError::TypeMismatch {
            field: key.to_string(),
            expected: "array",
        }),
    }
}
