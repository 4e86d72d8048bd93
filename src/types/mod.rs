//! Type model shared by the introspection oracle and the generator

pub mod descriptor;
pub mod type_system;

pub use descriptor::{
    InterfaceDescriptor, MethodInfo, MethodModifiers, MethodSignature, Parameter,
    TypeDescriptor, TypeKind, Visibility, IMPL_SUFFIX,
};
pub use type_system::{PrimitiveKind, TypeRef};
