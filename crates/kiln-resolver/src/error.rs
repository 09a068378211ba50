use thiserror::Error;

/// Errors that can occur while resolving command line placeholders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
  /// An input value placeholder names an unknown execution property.
  #[error("execution property not found: {name}")]
  MissingProperty { name: String },

  /// An input URI placeholder names an unknown input.
  #[error("input not found: {name}")]
  MissingInput { name: String },

  /// An output URI placeholder names an unknown output.
  #[error("output not found: {name}")]
  MissingOutput { name: String },

  /// The named input or output has no artifacts to take a URI from.
  #[error("{channel} '{name}' has no artifacts")]
  EmptyArtifactList { channel: String, name: String },

  /// A caller-supplied lookup failed.
  #[error("lookup failed for '{name}': {message}")]
  Lookup { name: String, message: String },
}
