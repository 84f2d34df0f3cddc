//! Template-driven SOAR data synthesis.
//!
//! A template is a JSON skeleton (`alerts` + `eventStream`) whose leaf strings
//! carry `${token}` placeholders. [`populate`] looks a template up by id,
//! resolves every placeholder against a use case's parameter map and one base
//! time captured for the whole call, and returns the typed alert/event lists.

pub mod populate;
pub mod resolver;
pub mod store;

pub use populate::{populate, populate_at, SoarData};
pub use resolver::resolve;

/// Parameter map for placeholder substitution and script line rendering.
/// Values are scalars; unknown keys in a template are left untouched.
pub type ParamMap = serde_json::Map<String, serde_json::Value>;
