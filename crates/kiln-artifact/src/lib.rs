//! Kiln Artifact
//!
//! This crate provides the artifact handle used by Kiln. Artifacts are named,
//! URI-addressable data units produced or consumed by a pipeline step. Kiln never
//! reads or writes artifact contents; it only needs to know where they live.
//!
//! A step receives its artifacts as an [`ArtifactDict`]: each input or output name
//! maps to an ordered list of artifacts. When a single location is needed (for
//! example to fill in a command line placeholder) only the first artifact is used.

use std::collections::{BTreeMap, HashMap};

use kiln_config::PropertyValue;
use serde::{Deserialize, Serialize};

/// Input or output artifacts of a step, keyed by name.
pub type ArtifactDict = HashMap<String, Vec<Artifact>>;

/// A handle to a URI-addressable artifact.
///
/// Serializes as a map, so templates can reach `artifact.uri`,
/// `artifact.type_name` and `artifact.properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
  /// Storage location of the artifact, e.g. `gs://bucket/examples/1`.
  pub uri: String,

  /// Optional artifact type name, e.g. `Examples` or `Model`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub type_name: Option<String>,

  /// Custom properties attached to the artifact.
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub properties: BTreeMap<String, PropertyValue>,
}

impl Artifact {
  /// Create an artifact handle pointing at `uri`.
  pub fn new(uri: impl Into<String>) -> Self {
    Self {
      uri: uri.into(),
      type_name: None,
      properties: BTreeMap::new(),
    }
  }

  pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
    self.type_name = Some(type_name.into());
    self
  }

  pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
    self.properties.insert(key.into(), value.into());
    self
  }

  pub fn uri(&self) -> &str {
    &self.uri
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_serialize_minimal() {
    let artifact = Artifact::new("gs://bucket/model");
    assert_eq!(
      serde_json::to_value(&artifact).unwrap(),
      json!({ "uri": "gs://bucket/model" })
    );
  }

  #[test]
  fn test_serialize_with_metadata() {
    let artifact = Artifact::new("/data/examples")
      .with_type_name("Examples")
      .with_property("split", "train");

    assert_eq!(
      serde_json::to_value(&artifact).unwrap(),
      json!({
        "uri": "/data/examples",
        "type_name": "Examples",
        "properties": { "split": "train" }
      })
    );
  }

  #[test]
  fn test_deserialize_dict() {
    let dict: ArtifactDict = serde_json::from_value(json!({
      "examples": [{ "uri": "gs://a" }, { "uri": "gs://b" }],
      "schema": []
    }))
    .unwrap();

    assert_eq!(dict["examples"].len(), 2);
    assert_eq!(dict["examples"][0].uri(), "gs://a");
    assert!(dict["schema"].is_empty());
  }
}
