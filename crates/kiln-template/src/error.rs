use minijinja::ErrorKind;

/// Errors that can occur while rendering a template string.
///
/// Each variant keeps the engine's original error as its source.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
  /// The template text is malformed.
  #[error("template syntax error in '{template}': {source}")]
  Syntax {
    template: String,
    #[source]
    source: minijinja::Error,
  },

  /// The template refers to a name, key or index that does not exist.
  #[error("undefined value in template '{template}': {source}")]
  Undefined {
    template: String,
    #[source]
    source: minijinja::Error,
  },

  /// Any other rendering failure.
  #[error("failed to render template '{template}': {source}")]
  Render {
    template: String,
    #[source]
    source: minijinja::Error,
  },
}

impl TemplateError {
  pub(crate) fn new(template: &str, source: minijinja::Error) -> Self {
    let template = template.to_string();
    match source.kind() {
      ErrorKind::SyntaxError => TemplateError::Syntax { template, source },
      ErrorKind::UndefinedError => TemplateError::Undefined { template, source },
      _ => TemplateError::Render { template, source },
    }
  }

  /// The template text that failed.
  pub fn template(&self) -> &str {
    match self {
      TemplateError::Syntax { template, .. }
      | TemplateError::Undefined { template, .. }
      | TemplateError::Render { template, .. } => template,
    }
  }

  /// The engine error, unmodified.
  pub fn engine_error(&self) -> &minijinja::Error {
    match self {
      TemplateError::Syntax { source, .. }
      | TemplateError::Undefined { source, .. }
      | TemplateError::Render { source, .. } => source,
    }
  }
}
