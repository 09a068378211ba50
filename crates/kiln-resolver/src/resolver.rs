use kiln_config::{CommandArg, ContainerSpec, Placeholder};
use tracing::{instrument, trace};

use crate::error::ResolveError;

/// Supplies the runtime values that placeholders stand in for.
pub trait PlaceholderSource {
  /// Value of the named input (an execution property).
  fn input_value(&self, name: &str) -> Result<String, ResolveError>;

  /// URI of the named input.
  fn input_uri(&self, name: &str) -> Result<String, ResolveError>;

  /// URI of the named output.
  fn output_uri(&self, name: &str) -> Result<String, ResolveError>;
}

/// A [`PlaceholderSource`] built from three lookup functions.
pub struct FnSource<V, I, O> {
  input_value: V,
  input_uri: I,
  output_uri: O,
}

impl<V, I, O> FnSource<V, I, O>
where
  V: Fn(&str) -> Result<String, ResolveError>,
  I: Fn(&str) -> Result<String, ResolveError>,
  O: Fn(&str) -> Result<String, ResolveError>,
{
  pub fn new(input_value: V, input_uri: I, output_uri: O) -> Self {
    Self {
      input_value,
      input_uri,
      output_uri,
    }
  }
}

impl<V, I, O> PlaceholderSource for FnSource<V, I, O>
where
  V: Fn(&str) -> Result<String, ResolveError>,
  I: Fn(&str) -> Result<String, ResolveError>,
  O: Fn(&str) -> Result<String, ResolveError>,
{
  fn input_value(&self, name: &str) -> Result<String, ResolveError> {
    (self.input_value)(name)
  }

  fn input_uri(&self, name: &str) -> Result<String, ResolveError> {
    (self.input_uri)(name)
  }

  fn output_uri(&self, name: &str) -> Result<String, ResolveError> {
    (self.output_uri)(name)
  }
}

/// Resolve the placeholders in the command line of a container.
///
/// Literal tokens pass through unchanged and each placeholder is replaced by the
/// value `source` returns for it. The output has one entry per token, in order.
/// The first failed lookup aborts resolution.
#[instrument(skip_all, fields(image = %spec.image, tokens = spec.command.len()))]
pub fn resolve_command_line<S>(spec: &ContainerSpec, source: &S) -> Result<Vec<String>, ResolveError>
where
  S: PlaceholderSource + ?Sized,
{
  spec
    .command
    .iter()
    .map(|arg| resolve_arg(arg, source))
    .collect()
}

fn resolve_arg<S>(arg: &CommandArg, source: &S) -> Result<String, ResolveError>
where
  S: PlaceholderSource + ?Sized,
{
  match arg {
    CommandArg::Literal(literal) => Ok(literal.clone()),
    CommandArg::Placeholder(placeholder) => {
      let value = match placeholder {
        Placeholder::InputValue(name) => source.input_value(name)?,
        Placeholder::InputUri(name) => source.input_uri(name)?,
        Placeholder::OutputUri(name) => source.output_uri(name)?,
      };
      trace!(kind = placeholder.kind(), name = placeholder.name(), %value, "resolved placeholder");
      Ok(value)
    }
  }
}
