//! Introspection oracle - the boundary between the generator and a type system
//!
//! The generator never inspects types itself. It asks an [`Introspector`]
//! for a [`TypeDescriptor`] and works from that, so it can be driven by a
//! manifest on disk or by synthetic descriptors in tests.

use std::collections::HashMap;

use crate::types::TypeDescriptor;
use crate::utils::{Error, Result};

/// Type introspection backend
pub trait Introspector {
    /// Describe the type named by `identifier` (a canonical name)
    fn describe(&self, identifier: &str) -> Result<TypeDescriptor>;
}

impl<T: Introspector + ?Sized> Introspector for &T {
    fn describe(&self, identifier: &str) -> Result<TypeDescriptor> {
        (**self).describe(identifier)
    }
}

/// In-memory oracle over a fixed set of descriptors
#[derive(Debug, Default, Clone)]
pub struct StaticIntrospector {
    types: HashMap<String, TypeDescriptor>,
}

impl StaticIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, descriptor: TypeDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.canonical_name.clone(), descriptor);
    }
}

impl Introspector for StaticIntrospector {
    fn describe(&self, identifier: &str) -> Result<TypeDescriptor> {
        self.types
            .get(identifier)
            .cloned()
            .ok_or_else(|| Error::InvalidInput(format!("Unknown type: {}", identifier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        let oracle = StaticIntrospector::new().with(TypeDescriptor::interface("geo.Shape", vec![]));
        assert_eq!(oracle.describe("geo.Shape").unwrap().simple_name, "Shape");
        assert!(matches!(oracle.describe("geo.Circle"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_reference_forwards() {
        let oracle = StaticIntrospector::new().with(TypeDescriptor::interface("Bare", vec![]));
        let by_ref = &oracle;
        assert_eq!(by_ref.describe("Bare").unwrap().package_name, "");
    }
}
