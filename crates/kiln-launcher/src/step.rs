//! Self-contained container step documents.

use std::collections::HashMap;
use std::io::Read;

use kiln_artifact::ArtifactDict;
use kiln_config::{ConfigError, ContainerTemplate, ExecProperties, PropertyValue, ResolvedContainerSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::container::resolve_container_template;
use crate::error::LaunchError;

/// A container template together with the data it is resolved against.
///
/// ```json
/// {
///   "container": { "mode": "placeholder", "image": "img", "command": ["run"] },
///   "input_dict": { "examples": [{ "uri": "gs://bucket/examples" }] },
///   "output_dict": {},
///   "exec_properties": { "epochs": 10 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerStep {
  pub container: ContainerTemplate,
  pub input_dict: ArtifactDict,
  pub output_dict: ArtifactDict,
  pub exec_properties: ExecProperties,
}

/// Wire form of a step; the container and properties are decoded separately
/// so their typed errors reach the caller.
#[derive(Deserialize)]
struct RawStep {
  container: Value,
  #[serde(default)]
  input_dict: ArtifactDict,
  #[serde(default)]
  output_dict: ArtifactDict,
  #[serde(default)]
  exec_properties: HashMap<String, Value>,
}

impl ContainerStep {
  pub fn from_json_str(json: &str) -> Result<Self, LaunchError> {
    let value: Value = serde_json::from_str(json).map_err(ConfigError::from)?;
    Self::from_value(value)
  }

  pub fn from_reader(reader: impl Read) -> Result<Self, LaunchError> {
    let value: Value = serde_json::from_reader(reader).map_err(ConfigError::from)?;
    Self::from_value(value)
  }

  /// Decode a step from a JSON value.
  ///
  /// Unknown command line tokens fail with [`ConfigError::UnsupportedArgument`]
  /// and non-scalar properties with [`ConfigError::UnsupportedProperty`].
  pub fn from_value(value: Value) -> Result<Self, LaunchError> {
    let raw: RawStep = serde_json::from_value(value).map_err(ConfigError::from)?;

    let container = ContainerTemplate::from_value(raw.container)?;
    let exec_properties = raw
      .exec_properties
      .into_iter()
      .map(|(name, value)| PropertyValue::try_from(value).map(|value| (name, value)))
      .collect::<Result<ExecProperties, ConfigError>>()?;

    Ok(Self {
      container,
      input_dict: raw.input_dict,
      output_dict: raw.output_dict,
      exec_properties,
    })
  }

  /// Resolve the container template against this step's data.
  pub fn resolve(&self) -> Result<ResolvedContainerSpec, LaunchError> {
    resolve_container_template(
      &self.container,
      &self.input_dict,
      &self.output_dict,
      &self.exec_properties,
    )
  }
}
