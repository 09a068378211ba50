use kiln_artifact::ArtifactDict;
use kiln_config::ExecProperties;
use minijinja::{Value, context};

/// The rendering context shared by every template of a container spec.
#[derive(Debug, Clone)]
pub struct TemplateContext {
  value: Value,
}

impl TemplateContext {
  /// Bind the raw step dictionaries as `input_dict`, `output_dict` and
  /// `exec_properties`.
  pub fn new(
    input_dict: &ArtifactDict,
    output_dict: &ArtifactDict,
    exec_properties: &ExecProperties,
  ) -> Self {
    let value = context! {
      input_dict => Value::from_serialize(input_dict),
      output_dict => Value::from_serialize(output_dict),
      exec_properties => Value::from_serialize(exec_properties),
    };
    Self { value }
  }

  pub fn as_value(&self) -> &Value {
    &self.value
  }
}
