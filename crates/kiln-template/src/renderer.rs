use minijinja::{Environment, UndefinedBehavior};
use tracing::trace;

use crate::context::TemplateContext;
use crate::error::TemplateError;

/// Renders template strings against a [`TemplateContext`].
pub struct TemplateRenderer {
  env: Environment<'static>,
}

impl TemplateRenderer {
  pub fn new() -> Self {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    Self { env }
  }

  /// Render a single template string.
  pub fn render_text(&self, text: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    trace!(template = text, "rendering template");
    self
      .env
      .render_str(text, context.as_value().clone())
      .map_err(|e| TemplateError::new(text, e))
  }

  /// Render each item in order. An empty list renders to an empty list
  /// without touching the engine.
  pub fn render_items(
    &self,
    items: &[String],
    context: &TemplateContext,
  ) -> Result<Vec<String>, TemplateError> {
    if items.is_empty() {
      return Ok(Vec::new());
    }

    items
      .iter()
      .map(|item| self.render_text(item, context))
      .collect()
  }
}

impl Default for TemplateRenderer {
  fn default() -> Self {
    Self::new()
  }
}
