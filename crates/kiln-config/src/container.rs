use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::CommandArg;
use crate::error::ConfigError;

/// A command-line program inside a container, described with typed placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
  /// Container image, used as-is.
  pub image: String,
  /// Command line tokens. An absent command is treated as empty.
  #[serde(default)]
  pub command: Vec<CommandArg>,
}

/// A container invocation whose string fields may embed template expressions.
///
/// Templates are rendered against a context exposing `input_dict`,
/// `output_dict` and `exec_properties`, e.g.
/// `"{{ input_dict['examples'][0].uri }}"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateContainerSpec {
  pub image: String,
  #[serde(default)]
  pub command: Vec<String>,
  #[serde(default)]
  pub args: Vec<String>,
}

/// A container spec template in exactly one of the two supported modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ContainerTemplate {
  /// Command line built from literals and typed placeholders.
  Placeholder(ContainerSpec),
  /// Free-text template strings in every field.
  Template(TemplateContainerSpec),
}

impl ContainerTemplate {
  /// Parse a container template from a JSON document.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    Self::from_value(serde_json::from_str(json)?)
  }

  /// Decode a container template from a JSON value.
  ///
  /// Placeholder-mode command tokens are converted one by one, so an unknown
  /// token shape surfaces as [`ConfigError::UnsupportedArgument`] rather than a
  /// generic parse error.
  pub fn from_value(mut value: Value) -> Result<Self, ConfigError> {
    let placeholder_mode = value.get("mode").and_then(Value::as_str) == Some("placeholder");
    let command = if placeholder_mode {
      value.as_object_mut().and_then(|map| map.remove("command"))
    } else {
      None
    };

    let mut template: ContainerTemplate = serde_json::from_value(value)?;
    if let (ContainerTemplate::Placeholder(spec), Some(command)) = (&mut template, command) {
      spec.command = decode_command(command)?;
    }
    Ok(template)
  }

  /// The wire name of this template's mode.
  pub fn mode(&self) -> &'static str {
    match self {
      ContainerTemplate::Placeholder(_) => "placeholder",
      ContainerTemplate::Template(_) => "template",
    }
  }

  pub fn image(&self) -> &str {
    match self {
      ContainerTemplate::Placeholder(spec) => &spec.image,
      ContainerTemplate::Template(spec) => &spec.image,
    }
  }
}

impl From<ContainerSpec> for ContainerTemplate {
  fn from(spec: ContainerSpec) -> Self {
    ContainerTemplate::Placeholder(spec)
  }
}

impl From<TemplateContainerSpec> for ContainerTemplate {
  fn from(spec: TemplateContainerSpec) -> Self {
    ContainerTemplate::Template(spec)
  }
}

fn decode_command(command: Value) -> Result<Vec<CommandArg>, ConfigError> {
  let tokens: Vec<Value> = serde_json::from_value(command)?;
  tokens.into_iter().map(CommandArg::try_from).collect()
}

/// A fully resolved container invocation, ready to hand to a launcher.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolvedContainerSpec {
  pub image: String,
  #[serde(default)]
  pub command: Vec<String>,
  #[serde(default)]
  pub args: Vec<String>,
}
