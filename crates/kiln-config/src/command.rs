//! Command line tokens for placeholder-mode container specs.
//!
//! On the wire a literal token is a plain JSON string and a placeholder is an
//! object naming its kind and the input/output it refers to:
//!
//! ```json
//! ["--data", { "type": "input_uri", "name": "examples" }]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// A typed marker standing in for a value that is only known at run time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placeholder {
  /// Replaced with the string value of the named execution property.
  InputValue(String),
  /// Replaced with the URI of the first artifact of the named input.
  InputUri(String),
  /// Replaced with the URI of the first artifact of the named output.
  OutputUri(String),
}

impl Placeholder {
  /// The input or output name this placeholder refers to.
  pub fn name(&self) -> &str {
    match self {
      Placeholder::InputValue(name) | Placeholder::InputUri(name) | Placeholder::OutputUri(name) => {
        name
      }
    }
  }

  /// The wire tag for this placeholder kind.
  pub fn kind(&self) -> &'static str {
    match self {
      Placeholder::InputValue(_) => "input_value",
      Placeholder::InputUri(_) => "input_uri",
      Placeholder::OutputUri(_) => "output_uri",
    }
  }
}

/// A single command line token: either a literal or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum CommandArg {
  Literal(String),
  Placeholder(Placeholder),
}

impl CommandArg {
  pub fn literal(value: impl Into<String>) -> Self {
    CommandArg::Literal(value.into())
  }

  pub fn input_value(name: impl Into<String>) -> Self {
    CommandArg::Placeholder(Placeholder::InputValue(name.into()))
  }

  pub fn input_uri(name: impl Into<String>) -> Self {
    CommandArg::Placeholder(Placeholder::InputUri(name.into()))
  }

  pub fn output_uri(name: impl Into<String>) -> Self {
    CommandArg::Placeholder(Placeholder::OutputUri(name.into()))
  }
}

impl From<&str> for CommandArg {
  fn from(value: &str) -> Self {
    CommandArg::Literal(value.to_string())
  }
}

impl From<Placeholder> for CommandArg {
  fn from(value: Placeholder) -> Self {
    CommandArg::Placeholder(value)
  }
}

impl TryFrom<Value> for CommandArg {
  type Error = ConfigError;

  fn try_from(value: Value) -> Result<Self, Self::Error> {
    let map = match value {
      Value::String(literal) => return Ok(CommandArg::Literal(literal)),
      Value::Object(map) => map,
      other => return Err(unsupported(&other)),
    };

    let known_keys = map.keys().all(|key| key == "type" || key == "name");
    let (true, Some(kind), Some(name)) = (
      known_keys,
      map.get("type").and_then(Value::as_str),
      map.get("name").and_then(Value::as_str),
    ) else {
      return Err(unsupported(&Value::Object(map.clone())));
    };

    let name = name.to_string();
    let placeholder = match kind {
      "input_value" => Placeholder::InputValue(name),
      "input_uri" => Placeholder::InputUri(name),
      "output_uri" => Placeholder::OutputUri(name),
      other => {
        return Err(ConfigError::UnsupportedArgument {
          found: format!("placeholder type '{}'", other),
        });
      }
    };

    Ok(CommandArg::Placeholder(placeholder))
  }
}

impl From<CommandArg> for Value {
  fn from(arg: CommandArg) -> Self {
    match arg {
      CommandArg::Literal(literal) => Value::String(literal),
      CommandArg::Placeholder(placeholder) => {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(placeholder.kind()));
        map.insert("name".to_string(), Value::from(placeholder.name()));
        Value::Object(map)
      }
    }
  }
}

fn unsupported(value: &Value) -> ConfigError {
  ConfigError::UnsupportedArgument {
    found: value.to_string(),
  }
}
