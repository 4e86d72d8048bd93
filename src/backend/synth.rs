//! Source synthesis - renders a class implementing an interface
//!
//! Every abstract method gets a body that returns the default value of its
//! return type. The assembled text is passed through the unicode escaper so
//! the written file is pure ASCII.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::frontend::extract_abstract_methods;
use crate::types::{InterfaceDescriptor, MethodSignature, PrimitiveKind, TypeRef};
use crate::utils::escape;

/// Indentation unit for generated code
pub const INDENT: &str = "    ";

/// Extension of generated source files
pub const SOURCE_EXTENSION: &str = ".java";

/// Extension of compiled class files
pub const CLASS_EXTENSION: &str = ".class";

/// Default value literal for a type; empty for `void`
pub fn default_value_for(ty: &TypeRef) -> &'static str {
    match ty {
        TypeRef::Primitive(kind) if kind.is_numeric() => "0",
        TypeRef::Primitive(PrimitiveKind::Boolean) => "false",
        TypeRef::Primitive(_) => "",
        TypeRef::Reference(_) => "null",
    }
}

/// `<type> <name>` pairs joined by `, `
pub fn render_parameter_list(signature: &MethodSignature) -> String {
    signature
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.ty.canonical(), p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A public method returning the default value of its return type
pub fn render_method_body(signature: &MethodSignature) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{INDENT}public {} {} ({}) {{",
        signature.return_type.canonical(),
        signature.name,
        render_parameter_list(signature)
    );
    if signature.return_type.is_void() {
        let _ = writeln!(out, "{INDENT}{INDENT}return;");
    } else {
        let value = default_value_for(&signature.return_type);
        let _ = writeln!(out, "{INDENT}{INDENT}return {};", value);
    }
    let _ = writeln!(out, "{INDENT}}}");
    out
}

/// Package declaration (when named) and the opening class declaration
pub fn render_header(descriptor: &InterfaceDescriptor) -> String {
    let mut out = String::new();
    if !descriptor.package_name().is_empty() {
        let _ = writeln!(out, "package {};", descriptor.package_name());
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "public class {} implements {} {{",
        descriptor.impl_name(),
        descriptor.canonical_name()
    );
    out
}

/// `<package path>/<Name>Impl<extension>` with the given separator
pub fn impl_file_name(
    descriptor: &InterfaceDescriptor,
    separator: &str,
    extension: &str,
) -> String {
    let mut name = String::new();
    for segment in package_segments(descriptor.package_name()) {
        name.push_str(segment);
        name.push_str(separator);
    }
    name.push_str(&descriptor.impl_name());
    name.push_str(extension);
    name
}

/// On-disk location of the implementing class's file under `root`
pub fn impl_path(root: &Path, descriptor: &InterfaceDescriptor, extension: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in package_segments(descriptor.package_name()) {
        path.push(segment);
    }
    path.push(format!("{}{}", descriptor.impl_name(), extension));
    path
}

fn package_segments(package: &str) -> impl Iterator<Item = &str> {
    package.split('.').filter(|s| !s.is_empty())
}

/// Full source text of one implementing class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Canonical name of the implemented interface
    pub interface: String,
    /// Canonical name of the generated class
    pub class_name: String,
    /// ASCII-only source text
    pub text: String,
    /// Number of generated method bodies
    pub method_count: usize,
}

/// Render the implementing class for `descriptor`
pub fn synthesize(descriptor: &InterfaceDescriptor) -> GeneratedUnit {
    let methods = extract_abstract_methods(descriptor);

    let mut text = render_header(descriptor);
    for method in &methods {
        text.push_str(&render_method_body(method));
    }
    text.push_str("}\n");

    GeneratedUnit {
        interface: descriptor.canonical_name().to_string(),
        class_name: descriptor.impl_canonical_name(),
        text: escape::encode(&text),
        method_count: methods.len(),
    }
}
