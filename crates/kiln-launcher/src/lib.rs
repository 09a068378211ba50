//! Kiln Launcher
//!
//! Launcher-facing entry points for Kiln. A container launcher calls
//! [`resolve_container_template`] once per step, just before starting the
//! container, to turn a [`ContainerTemplate`](kiln_config::ContainerTemplate)
//! into a concrete image and argument list.
//!
//! Placeholder-mode templates are resolved with `kiln-resolver`, looking values
//! up in the step's execution properties and artifact URIs. Template-mode specs
//! are rendered with `kiln-template`.
//!
//! The crate also carries the [`swagger`] flattener and a small
//! [`ContainerManifest`] builder for launchers that submit containers as
//! Kubernetes-style API objects.

mod container;
mod error;
mod manifest;
mod step;
pub mod swagger;

pub use container::{ArtifactSource, resolve_command_line_for_non_managed, resolve_container_template};
pub use error::LaunchError;
pub use manifest::{ContainerManifest, EnvVar};
pub use step::ContainerStep;
pub use swagger::{Swagger, SwaggerObject, to_swagger_dict};
