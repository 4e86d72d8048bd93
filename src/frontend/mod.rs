//! Frontend module - Introspection and signature extraction

pub mod extract;
pub mod introspect;
pub mod manifest;

pub use extract::extract_abstract_methods;
pub use introspect::{Introspector, StaticIntrospector};
pub use manifest::{ManifestIntrospector, DEFAULT_MANIFEST};
