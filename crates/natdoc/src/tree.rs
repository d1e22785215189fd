//! A minimal structured value tree for the JSON-shaped outputs.
//!
//! The renderers only ever build objects, arrays, strings and booleans, so this is all the tree
//! supports. Object keys are kept sorted, which makes every serialization deterministic.

use crate::DocResult;
use derive_more::Deref;
use serde::Serialize;
use std::collections::BTreeMap;

/// A node of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Object(Object),
    Array(Vec<Node>),
    String(String),
    Bool(bool),
}

impl Node {
    /// Returns the object if this node is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the elements if this node is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string if this node is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this node is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Looks up `key` if this node is an object.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Serializes the tree without any whitespace.
    ///
    /// Neither serialization ends with a newline; writers add their own line terminator.
    pub fn to_compact_string(&self) -> DocResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the tree with indentation, one member per line.
    pub fn to_pretty_string(&self) -> DocResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Object> for Node {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Vec<Self>> for Node {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(items)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl FromIterator<Self> for Node {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

/// An object node: string keys mapped to nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deref)]
#[serde(transparent)]
pub struct Object(BTreeMap<String, Node>);

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder variant of [`Object::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }
}
