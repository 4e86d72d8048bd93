//! Interface descriptors and method signatures

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use super::type_system::TypeRef;
use crate::utils::Error;

/// Suffix appended to the interface's simple name to form the class name
pub const IMPL_SUFFIX: &str = "Impl";

/// One declared parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: TypeRef, name: &str) -> Self {
        Self { ty, name: name.to_string() }
    }
}

/// Name, return type and ordered parameters of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSignature {
    pub name: String,
    pub return_type: TypeRef,
    pub parameters: Vec<Parameter>,
}

impl MethodSignature {
    pub fn new(name: &str, return_type: TypeRef, parameters: Vec<Parameter>) -> Self {
        Self { name: name.to_string(), return_type, parameters }
    }

    /// Name plus parameter types; two methods with the same key override each other
    pub fn erasure_key(&self) -> (String, Vec<String>) {
        let types = self.parameters.iter().map(|p| p.ty.canonical().to_string()).collect();
        (self.name.clone(), types)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodModifiers {
    pub is_abstract: bool,
    pub is_default: bool,
    pub is_static: bool,
    pub is_private: bool,
    pub deprecated: bool,
}

impl MethodModifiers {
    pub fn abstract_method() -> Self {
        Self { is_abstract: true, ..Self::default() }
    }
}

/// A member method as reported by the introspection oracle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub signature: MethodSignature,
    pub modifiers: MethodModifiers,
}

impl MethodInfo {
    pub fn new(signature: MethodSignature, modifiers: MethodModifiers) -> Self {
        Self { signature, modifiers }
    }

    pub fn abstract_method(signature: MethodSignature) -> Self {
        Self::new(signature, MethodModifiers::abstract_method())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Interface,
    Class,
    Enum,
    Annotation,
    Record,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Package,
    Protected,
    Private,
}

/// Raw answer of the introspection oracle for one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub canonical_name: String,
    /// Empty for the unnamed package
    pub package_name: String,
    pub simple_name: String,
    pub kind: TypeKind,
    pub visibility: Visibility,
    /// Member methods, own declarations first, then inherited ones
    pub methods: Vec<MethodInfo>,
    /// Location of the type's compiled code, when known
    pub code_source: Option<PathBuf>,
}

impl TypeDescriptor {
    /// Describe a public interface; package and simple name come from the canonical name
    pub fn interface(canonical_name: &str, methods: Vec<MethodInfo>) -> Self {
        let (package_name, simple_name) = split_canonical(canonical_name);
        Self {
            canonical_name: canonical_name.to_string(),
            package_name: package_name.to_string(),
            simple_name: simple_name.to_string(),
            kind: TypeKind::Interface,
            visibility: Visibility::Public,
            methods,
            code_source: None,
        }
    }
}

/// Split `a.b.Name` into (`a.b`, `Name`)
pub fn split_canonical(canonical_name: &str) -> (&str, &str) {
    match canonical_name.rsplit_once('.') {
        Some((package, simple)) => (package, simple),
        None => ("", canonical_name),
    }
}

/// A type that has been checked to be an implementable interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    inner: TypeDescriptor,
}

impl TryFrom<TypeDescriptor> for InterfaceDescriptor {
    type Error = Error;

    fn try_from(descriptor: TypeDescriptor) -> Result<Self, Error> {
        if descriptor.kind != TypeKind::Interface {
            return Err(Error::InvalidInput(format!(
                "Interface expected, {} is {:?}",
                descriptor.canonical_name, descriptor.kind
            )));
        }
        if descriptor.visibility == Visibility::Private {
            return Err(Error::InvalidInput(format!(
                "Can not implement private interface {}",
                descriptor.canonical_name
            )));
        }
        Ok(Self { inner: descriptor })
    }
}

impl InterfaceDescriptor {
    pub fn package_name(&self) -> &str {
        &self.inner.package_name
    }

    pub fn simple_name(&self) -> &str {
        &self.inner.simple_name
    }

    pub fn canonical_name(&self) -> &str {
        &self.inner.canonical_name
    }

    pub fn methods(&self) -> &[MethodInfo] {
        &self.inner.methods
    }

    pub fn code_source(&self) -> Option<&Path> {
        self.inner.code_source.as_deref()
    }

    /// Simple name of the implementing class
    pub fn impl_name(&self) -> String {
        format!("{}{}", self.inner.simple_name, IMPL_SUFFIX)
    }

    /// Canonical name of the implementing class
    pub fn impl_canonical_name(&self) -> String {
        if self.inner.package_name.is_empty() {
            self.impl_name()
        } else {
            format!("{}.{}", self.inner.package_name, self.impl_name())
        }
    }
}
