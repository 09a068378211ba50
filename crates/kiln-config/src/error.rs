use thiserror::Error;

/// Errors raised while decoding container configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// A command line token is neither a literal string nor a known placeholder.
  #[error("unsupported command line argument: {found}")]
  UnsupportedArgument { found: String },

  /// An execution property is not a string, number or boolean.
  #[error("unsupported execution property value: {found}")]
  UnsupportedProperty { found: String },

  /// The configuration document could not be parsed.
  #[error("failed to parse container config: {0}")]
  Parse(#[from] serde_json::Error),
}
