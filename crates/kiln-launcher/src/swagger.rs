//! Conversion of API objects into plain swagger dictionaries.
//!
//! Generated API model types name their fields differently from the wire format
//! (`image_pull_policy` vs `imagePullPolicy`). A [`SwaggerObject`] declares that
//! mapping explicitly, and [`to_swagger_dict`] walks a [`Swagger`] value and
//! produces JSON built only from arrays, objects and scalars, keyed by wire names.
//!
//! The input must be acyclic. Values are owned trees, so this holds for anything
//! built through this module.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// An API object with a declared field → wire name mapping.
pub trait SwaggerObject: fmt::Debug {
  /// Pairs of `(field key, wire name)`, in output order.
  fn attribute_map(&self) -> &'static [(&'static str, &'static str)];

  /// The value of the field named `key` in [`attribute_map`](Self::attribute_map).
  fn attribute(&self, key: &str) -> Swagger;
}

/// A value that can be flattened into a swagger dictionary.
#[derive(Debug)]
pub enum Swagger {
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  String(String),
  List(Vec<Swagger>),
  Dict(BTreeMap<String, Swagger>),
  Object(Box<dyn SwaggerObject>),
}

impl Swagger {
  pub fn object(object: impl SwaggerObject + 'static) -> Self {
    Swagger::Object(Box::new(object))
  }

  /// Whether this value counts as set. Null, `false`, zero, empty strings and
  /// empty collections are unset; objects are always set.
  pub fn is_truthy(&self) -> bool {
    match self {
      Swagger::Null => false,
      Swagger::Bool(b) => *b,
      Swagger::Int(i) => *i != 0,
      Swagger::Float(x) => *x != 0.0,
      Swagger::String(s) => !s.is_empty(),
      Swagger::List(items) => !items.is_empty(),
      Swagger::Dict(entries) => !entries.is_empty(),
      Swagger::Object(_) => true,
    }
  }
}

impl From<&str> for Swagger {
  fn from(value: &str) -> Self {
    Swagger::String(value.to_string())
  }
}

impl From<String> for Swagger {
  fn from(value: String) -> Self {
    Swagger::String(value)
  }
}

impl From<i64> for Swagger {
  fn from(value: i64) -> Self {
    Swagger::Int(value)
  }
}

impl From<f64> for Swagger {
  fn from(value: f64) -> Self {
    Swagger::Float(value)
  }
}

impl From<bool> for Swagger {
  fn from(value: bool) -> Self {
    Swagger::Bool(value)
  }
}

impl<T: Into<Swagger>> From<Option<T>> for Swagger {
  fn from(value: Option<T>) -> Self {
    value.map_or(Swagger::Null, Into::into)
  }
}

impl<T: Into<Swagger>> From<Vec<T>> for Swagger {
  fn from(value: Vec<T>) -> Self {
    Swagger::List(value.into_iter().map(Into::into).collect())
  }
}

/// Flatten `value` into plain JSON.
///
/// Lists are flattened element-wise and dicts value-wise. Objects become maps
/// keyed by wire name, leaving out attributes that are not set.
pub fn to_swagger_dict(value: &Swagger) -> Value {
  match value {
    Swagger::Null => Value::Null,
    Swagger::Bool(b) => Value::Bool(*b),
    Swagger::Int(i) => Value::from(*i),
    Swagger::Float(x) => Value::from(*x),
    Swagger::String(s) => Value::String(s.clone()),
    Swagger::List(items) => Value::Array(items.iter().map(to_swagger_dict).collect()),
    Swagger::Dict(entries) => Value::Object(
      entries
        .iter()
        .map(|(key, value)| (key.clone(), to_swagger_dict(value)))
        .collect(),
    ),
    Swagger::Object(object) => {
      let mut map = Map::new();
      for (key, wire_name) in object.attribute_map() {
        let attribute = object.attribute(key);
        if attribute.is_truthy() {
          map.insert(wire_name.to_string(), to_swagger_dict(&attribute));
        }
      }
      Value::Object(map)
    }
  }
}
