//! Execution property values.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// Execution properties supplied to a step at run time, keyed by property name.
pub type ExecProperties = HashMap<String, PropertyValue>;

/// A resolved scalar execution property.
///
/// Serialized untagged so that JSON scalars map directly onto the variants and
/// templates see plain values. Integers keep their exact digits: values above
/// `i64::MAX` decode as [`PropertyValue::UInt`]. `null`, arrays and objects are
/// not scalars and fail with [`ConfigError::UnsupportedProperty`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
  Bool(bool),
  Int(i64),
  UInt(u64),
  Float(f64),
  String(String),
}

impl TryFrom<Value> for PropertyValue {
  type Error = ConfigError;

  fn try_from(value: Value) -> Result<Self, Self::Error> {
    match value {
      Value::Bool(b) => Ok(PropertyValue::Bool(b)),
      Value::String(s) => Ok(PropertyValue::String(s)),
      Value::Number(n) => {
        if let Some(i) = n.as_i64() {
          Ok(PropertyValue::Int(i))
        } else if let Some(u) = n.as_u64() {
          Ok(PropertyValue::UInt(u))
        } else if let Some(x) = n.as_f64() {
          Ok(PropertyValue::Float(x))
        } else {
          Err(ConfigError::UnsupportedProperty {
            found: n.to_string(),
          })
        }
      }
      other => Err(ConfigError::UnsupportedProperty {
        found: other.to_string(),
      }),
    }
  }
}

impl<'de> Deserialize<'de> for PropertyValue {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let value = Value::deserialize(deserializer)?;
    PropertyValue::try_from(value).map_err(serde::de::Error::custom)
  }
}

impl fmt::Display for PropertyValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PropertyValue::Bool(b) => write!(f, "{}", b),
      PropertyValue::Int(i) => write!(f, "{}", i),
      PropertyValue::UInt(u) => write!(f, "{}", u),
      // Keep a trailing ".0" on whole floats so they stay distinguishable from ints
      PropertyValue::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
      PropertyValue::Float(x) => write!(f, "{}", x),
      PropertyValue::String(s) => f.write_str(s),
    }
  }
}

impl From<&str> for PropertyValue {
  fn from(value: &str) -> Self {
    PropertyValue::String(value.to_string())
  }
}

impl From<String> for PropertyValue {
  fn from(value: String) -> Self {
    PropertyValue::String(value)
  }
}

impl From<i64> for PropertyValue {
  fn from(value: i64) -> Self {
    PropertyValue::Int(value)
  }
}

impl From<u64> for PropertyValue {
  fn from(value: u64) -> Self {
    PropertyValue::UInt(value)
  }
}

impl From<f64> for PropertyValue {
  fn from(value: f64) -> Self {
    PropertyValue::Float(value)
  }
}

impl From<bool> for PropertyValue {
  fn from(value: bool) -> Self {
    PropertyValue::Bool(value)
  }
}
