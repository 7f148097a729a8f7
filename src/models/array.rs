//! Typed container
//!
//! An [`Array`] is an ordered sequence of one entity type, tagged with the key
//! it serializes under (`links`, `items`, `queries` or `data`). Besides the
//! slice behaviour it exposes through `Deref`, it supports search by `name`
//! and/or `rel`.

use super::{Entity, ModelError, ModelResult};
use serde_json::{Map, Value};
use std::ops::Deref;

/// A container element before validation: an already-typed entity, or a raw
/// JSON value that must be a mapping coercible to the entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Member<T> {
    Typed(T),
    Raw(Value),
}

impl<T> From<T> for Member<T> {
    fn from(entity: T) -> Self {
        Member::Typed(entity)
    }
}

impl<T: Entity> Member<T> {
    fn into_entity(self) -> ModelResult<T> {
        match self {
            Member::Typed(entity) => Ok(entity),
            Member::Raw(Value::Object(fields)) => T::from_fields(fields),
            Member::Raw(other) => Err(ModelError::InvalidElement {
                expected: T::KIND,
                value: other.to_string(),
            }),
        }
    }
}

/// Result of attribute-style lookup on a container.
///
/// A single match is returned bare and several matches as a list. Callers
/// that always want a list should use [`Array::find`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a, T> {
    One(&'a T),
    Many(Vec<&'a T>),
}

impl<'a, T> Lookup<'a, T> {
    /// The single match, or `None` when the lookup was ambiguous
    pub fn one(&self) -> Option<&'a T> {
        match self {
            Lookup::One(entity) => Some(*entity),
            Lookup::Many(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Lookup::One(_) => 1,
            Lookup::Many(all) => all.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a list regardless of cardinality
    pub fn into_vec(self) -> Vec<&'a T> {
        match self {
            Lookup::One(entity) => vec![entity],
            Lookup::Many(all) => all,
        }
    }
}

/// Ordered, homogeneously typed sequence of entities
#[derive(Debug, Clone)]
pub struct Array<T> {
    key: String,
    items: Vec<T>,
}

impl<T: Entity> Array<T> {
    /// Build a container from typed entities and/or raw mappings.
    ///
    /// Fails on the first element that is neither a `T` nor a mapping, or on a
    /// mapping that does not construct a valid `T`.
    pub fn new<I, M>(key: impl Into<String>, elements: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = M>,
        M: Into<Member<T>>,
    {
        let items = elements
            .into_iter()
            .map(|element| {
                let member: Member<T> = element.into();
                member.into_entity()
            })
            .collect::<ModelResult<Vec<T>>>()?;
        Ok(Self {
            key: key.into(),
            items,
        })
    }

    /// An empty container serializing under `key`
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
        }
    }

    /// The key this container serializes under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The declared element type
    pub fn kind(&self) -> &'static str {
        T::KIND
    }

    pub fn push(&mut self, entity: T) {
        self.items.push(entity);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// All elements matching the filter, in container order.
    ///
    /// With one filter, elements whose attribute equals it match. With both,
    /// an element matches only if `name` and `rel` are both equal; there is no
    /// fallback to either one alone. With neither, elements lacking both
    /// attributes match.
    pub fn find(&self, name: Option<&str>, rel: Option<&str>) -> Vec<&T> {
        self.matches(name, rel).collect()
    }

    /// First element matching the filter, see [`Array::find`]
    pub fn get(&self, name: Option<&str>, rel: Option<&str>) -> ModelResult<&T> {
        self.matches(name, rel)
            .next()
            .ok_or_else(|| ModelError::NoMatch {
                name: name.map(str::to_string),
                rel: rel.map(str::to_string),
            })
    }

    /// Attribute-style lookup by element `name`
    pub fn lookup(&self, key: &str) -> ModelResult<Lookup<'_, T>> {
        let mut found = self.find(Some(key), None);
        match found.len() {
            0 => Err(ModelError::AttributeNotFound {
                key: key.to_string(),
            }),
            1 => Ok(Lookup::One(found.remove(0))),
            _ => Ok(Lookup::Many(found)),
        }
    }

    /// Names of all elements that carry one
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().filter_map(Entity::name).collect()
    }

    /// `{key: [element, ...]}`
    pub fn to_map(&self) -> Map<String, Value> {
        let mut output = Map::new();
        output.insert(
            self.key.clone(),
            Value::Array(self.items.iter().map(Entity::to_value).collect()),
        );
        output
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    fn matches<'s, 'q>(
        &'s self,
        name: Option<&'q str>,
        rel: Option<&'q str>,
    ) -> impl Iterator<Item = &'s T> {
        self.items.iter().filter(move |item| match (name, rel) {
            (Some(name), None) => item.name() == Some(name),
            (None, Some(rel)) => item.rel() == Some(rel),
            _ => item.name() == name && item.rel() == rel,
        })
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Only contents are compared; the key and element type are not.
impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
