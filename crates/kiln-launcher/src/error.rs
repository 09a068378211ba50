//! Launcher error types.

use kiln_config::ConfigError;
use kiln_resolver::ResolveError;
use kiln_template::TemplateError;

/// Errors that can occur while resolving a container step.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
  /// The step document could not be decoded.
  #[error("invalid container step: {0}")]
  Config(#[from] ConfigError),

  /// A command line placeholder could not be resolved.
  #[error("failed to resolve command line: {0}")]
  Resolve(#[from] ResolveError),

  /// A template string could not be rendered.
  #[error(transparent)]
  Template(#[from] TemplateError),
}
