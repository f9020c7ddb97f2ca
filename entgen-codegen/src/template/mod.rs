//! Template emission engine.
//!
//! Templates are looked up by name in a [`TemplateRegistry`]. Built-in
//! templates are Rust functions; external sources are parsed into
//! [`TextTemplate`]s. Registering a name twice replaces the earlier
//! definition, which is how external sources override built-ins.
//!
//! An [`Emitter`] executes a template against a [`Scope`] (the graph plus
//! the entity, field or edge currently being rendered). Templates include
//! each other by name through the emitter, so an override of one template
//! is picked up by every template that includes it.
//!
//! # Text template syntax
//!
//! ```text
//! {{/* a comment */}}
//! {{ define "debug" }}
//! {{- range entities }}
//! {{ entity.name }}: {{ entity.columns }}
//! {{- end }}
//! {{ end }}
//! ```
//!
//! - `{{ define "name" }} ... {{ end }}` defines a template. A source with
//!   no `define` is one template named after its file stem.
//! - `{{ var.path }}` substitutes a variable of the current scope.
//! - `{{ range fields }}`, `{{ range edges }}`, `{{ range entities }}`
//!   repeat their body per item.
//! - `{{ template "name" }}` includes another template in the current scope.
//! - `{{-` and `-}}` trim the whitespace before or after the action.

mod error;
mod exec;
mod load;
mod parse;
mod registry;

pub use error::TemplateError;
pub use exec::{Emitter, MAX_DEPTH, Scope};
pub use load::TEMPLATE_EXTENSION;
pub use parse::TextTemplate;
pub use registry::{BuiltinFn, Template, TemplateRegistry};
