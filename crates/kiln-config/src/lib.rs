//! Kiln Config
//!
//! This crate contains the serializable container step configuration types for Kiln.
//! These types describe a container invocation before its placeholders and templates
//! have been resolved against the step's artifacts and execution properties.
//!
//! A container template comes in one of two modes:
//! - `placeholder`: the command line is a sequence of literal strings and typed
//!   placeholders ([`CommandArg`]).
//! - `template`: every string field may embed minijinja template expressions.
//!
//! ```json
//! {
//!   "mode": "placeholder",
//!   "image": "trainer:latest",
//!   "command": ["train", "--epochs", { "type": "input_value", "name": "epochs" }]
//! }
//! ```

mod command;
mod container;
mod error;
mod property;

pub use command::{CommandArg, Placeholder};
pub use container::{ContainerSpec, ContainerTemplate, ResolvedContainerSpec, TemplateContainerSpec};
pub use error::ConfigError;
pub use property::{ExecProperties, PropertyValue};
