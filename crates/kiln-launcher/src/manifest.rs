//! Kubernetes-style container manifests built from resolved specs.

use kiln_config::ResolvedContainerSpec;
use serde_json::Value;

use crate::swagger::{Swagger, SwaggerObject, to_swagger_dict};

/// An environment variable passed to a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
  pub name: String,
  pub value: Option<String>,
}

impl SwaggerObject for EnvVar {
  fn attribute_map(&self) -> &'static [(&'static str, &'static str)] {
    &[("name", "name"), ("value", "value")]
  }

  fn attribute(&self, key: &str) -> Swagger {
    match key {
      "name" => Swagger::from(self.name.as_str()),
      "value" => Swagger::from(self.value.clone()),
      _ => Swagger::Null,
    }
  }
}

/// A container definition in the shape a Kubernetes pod spec expects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerManifest {
  pub name: String,
  pub image: String,
  pub command: Vec<String>,
  pub args: Vec<String>,
  pub env: Vec<EnvVar>,
  pub image_pull_policy: Option<String>,
  pub working_dir: Option<String>,
}

impl ContainerManifest {
  /// Build a manifest for a resolved container spec.
  pub fn from_resolved(name: impl Into<String>, spec: &ResolvedContainerSpec) -> Self {
    Self {
      name: name.into(),
      image: spec.image.clone(),
      command: spec.command.clone(),
      args: spec.args.clone(),
      ..Default::default()
    }
  }

  pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.env.push(EnvVar {
      name: name.into(),
      value: Some(value.into()),
    });
    self
  }

  pub fn with_image_pull_policy(mut self, policy: impl Into<String>) -> Self {
    self.image_pull_policy = Some(policy.into());
    self
  }

  pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
    self.working_dir = Some(dir.into());
    self
  }

  /// Flatten into a swagger dictionary, omitting unset fields.
  pub fn to_swagger_dict(&self) -> Value {
    to_swagger_dict(&Swagger::object(self.clone()))
  }
}

impl SwaggerObject for ContainerManifest {
  fn attribute_map(&self) -> &'static [(&'static str, &'static str)] {
    &[
      ("name", "name"),
      ("image", "image"),
      ("command", "command"),
      ("args", "args"),
      ("env", "env"),
      ("image_pull_policy", "imagePullPolicy"),
      ("working_dir", "workingDir"),
    ]
  }

  fn attribute(&self, key: &str) -> Swagger {
    match key {
      "name" => Swagger::from(self.name.as_str()),
      "image" => Swagger::from(self.image.as_str()),
      "command" => Swagger::from(self.command.clone()),
      "args" => Swagger::from(self.args.clone()),
      "env" => Swagger::List(self.env.iter().cloned().map(Swagger::object).collect()),
      "image_pull_policy" => Swagger::from(self.image_pull_policy.clone()),
      "working_dir" => Swagger::from(self.working_dir.clone()),
      _ => Swagger::Null,
    }
  }
}
