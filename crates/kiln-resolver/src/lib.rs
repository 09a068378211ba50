//! Kiln Resolver
//!
//! Resolves typed placeholders in a container's command line into concrete
//! strings. Values are obtained through a [`PlaceholderSource`], so the resolver
//! has no knowledge of where inputs, outputs or properties actually live.

mod error;
mod resolver;

pub use error::ResolveError;
pub use resolver::{FnSource, PlaceholderSource, resolve_command_line};
