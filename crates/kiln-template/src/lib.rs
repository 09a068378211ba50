//! Kiln Template
//!
//! Renders container spec template strings with minijinja.
//!
//! Every template is rendered against the same three bindings:
//!
//! - `input_dict`: input name → list of artifacts
//! - `output_dict`: output name → list of artifacts
//! - `exec_properties`: property name → scalar value
//!
//! ```text
//! --train-data={{ input_dict['examples'][0].uri }}
//! --epochs={{ exec_properties['epochs'] }}
//! ```
//!
//! Undefined values are an error rather than an empty string, so a template
//! that refers to a missing input, output, property or index fails to render.

mod context;
mod error;
mod renderer;

pub use context::TemplateContext;
pub use error::TemplateError;
pub use renderer::TemplateRenderer;
