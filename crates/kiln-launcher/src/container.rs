//! Container template resolution.

use kiln_artifact::{Artifact, ArtifactDict};
use kiln_config::{ContainerSpec, ContainerTemplate, ExecProperties, ResolvedContainerSpec};
use kiln_resolver::{PlaceholderSource, ResolveError, resolve_command_line};
use kiln_template::{TemplateContext, TemplateRenderer};
use tracing::{debug, instrument};

use crate::error::LaunchError;

/// Looks placeholder values up in a step's properties and artifacts.
///
/// - input values come from `exec_properties[name]`
/// - input URIs come from `input_dict[name][0].uri`
/// - output URIs come from `output_dict[name][0].uri`
pub struct ArtifactSource<'a> {
  input_dict: &'a ArtifactDict,
  output_dict: &'a ArtifactDict,
  exec_properties: &'a ExecProperties,
}

impl<'a> ArtifactSource<'a> {
  pub fn new(
    input_dict: &'a ArtifactDict,
    output_dict: &'a ArtifactDict,
    exec_properties: &'a ExecProperties,
  ) -> Self {
    Self {
      input_dict,
      output_dict,
      exec_properties,
    }
  }
}

impl PlaceholderSource for ArtifactSource<'_> {
  fn input_value(&self, name: &str) -> Result<String, ResolveError> {
    self
      .exec_properties
      .get(name)
      .map(ToString::to_string)
      .ok_or_else(|| ResolveError::MissingProperty {
        name: name.to_string(),
      })
  }

  fn input_uri(&self, name: &str) -> Result<String, ResolveError> {
    let artifacts = self
      .input_dict
      .get(name)
      .ok_or_else(|| ResolveError::MissingInput {
        name: name.to_string(),
      })?;
    first_uri(artifacts, "input", name)
  }

  fn output_uri(&self, name: &str) -> Result<String, ResolveError> {
    let artifacts = self
      .output_dict
      .get(name)
      .ok_or_else(|| ResolveError::MissingOutput {
        name: name.to_string(),
      })?;
    first_uri(artifacts, "output", name)
  }
}

fn first_uri(
  artifacts: &[Artifact],
  channel: &str,
  name: &str,
) -> Result<String, ResolveError> {
  artifacts
    .first()
    .map(|artifact| artifact.uri.clone())
    .ok_or_else(|| ResolveError::EmptyArtifactList {
      channel: channel.to_string(),
      name: name.to_string(),
    })
}

/// Resolve a container template into a concrete container invocation.
///
/// Placeholder-mode templates keep their image as-is and resolve the command
/// line against `exec_properties` and the first artifact of each named input
/// or output; `args` is left empty. Template-mode specs render the image and
/// every command and args entry against `input_dict`, `output_dict` and
/// `exec_properties`.
#[instrument(skip_all, fields(mode = template.mode(), image = template.image()))]
pub fn resolve_container_template(
  template: &ContainerTemplate,
  input_dict: &ArtifactDict,
  output_dict: &ArtifactDict,
  exec_properties: &ExecProperties,
) -> Result<ResolvedContainerSpec, LaunchError> {
  let resolved = match template {
    ContainerTemplate::Placeholder(spec) => ResolvedContainerSpec {
      image: spec.image.clone(),
      command: resolve_command_line_for_non_managed(spec, input_dict, output_dict, exec_properties)?,
      args: Vec::new(),
    },
    ContainerTemplate::Template(spec) => {
      let context = TemplateContext::new(input_dict, output_dict, exec_properties);
      let renderer = TemplateRenderer::new();
      ResolvedContainerSpec {
        image: renderer.render_text(&spec.image, &context)?,
        command: renderer.render_items(&spec.command, &context)?,
        args: renderer.render_items(&spec.args, &context)?,
      }
    }
  };

  debug!(
    command = resolved.command.len(),
    args = resolved.args.len(),
    "resolved container template"
  );

  Ok(resolved)
}

/// Resolve the placeholders in a container's command line against a step's
/// properties and artifacts.
pub fn resolve_command_line_for_non_managed(
  spec: &ContainerSpec,
  input_dict: &ArtifactDict,
  output_dict: &ArtifactDict,
  exec_properties: &ExecProperties,
) -> Result<Vec<String>, ResolveError> {
  let source = ArtifactSource::new(input_dict, output_dict, exec_properties);
  resolve_command_line(spec, &source)
}
