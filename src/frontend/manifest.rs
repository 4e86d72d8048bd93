//! Type manifests - JSON descriptions of interfaces on disk
//!
//! A manifest lists types with their kind, visibility, superinterfaces and
//! methods. [`ManifestIntrospector`] loads any number of manifests, caches
//! the types by canonical name and answers [`Introspector::describe`] with
//! the full member surface, inherited methods included.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use super::introspect::Introspector;
use crate::types::descriptor::split_canonical;
use crate::types::{
    MethodInfo, MethodModifiers, MethodSignature, Parameter, TypeDescriptor, TypeKind, TypeRef,
    Visibility,
};
use crate::utils::{Error, Result};

/// File name looked up when no manifest is given explicitly
pub const DEFAULT_MANIFEST: &str = "implgen.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    code_source: Option<PathBuf>,
    types: Vec<ManifestType>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestType {
    name: String,
    #[serde(default)]
    package: Option<String>,
    #[serde(default = "default_kind")]
    kind: TypeKind,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    extends: Vec<String>,
    #[serde(default)]
    methods: Vec<ManifestMethod>,
    #[serde(default)]
    code_source: Option<PathBuf>,
}

fn default_kind() -> TypeKind {
    TypeKind::Interface
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestMethod {
    name: String,
    returns: TypeRef,
    #[serde(default)]
    params: Vec<ManifestParam>,
    #[serde(default, rename = "abstract")]
    is_abstract: Option<bool>,
    #[serde(default)]
    default: bool,
    #[serde(default, rename = "static")]
    is_static: bool,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    deprecated: bool,
}

impl ManifestMethod {
    fn to_info(&self) -> MethodInfo {
        let parameters = self
            .params
            .iter()
            .enumerate()
            .map(|(i, p)| Parameter {
                ty: p.ty.clone(),
                name: p.name.clone().unwrap_or_else(|| format!("arg{}", i)),
            })
            .collect();
        let modifiers = MethodModifiers {
            is_abstract: self
                .is_abstract
                .unwrap_or(!(self.default || self.is_static || self.private)),
            is_default: self.default,
            is_static: self.is_static,
            is_private: self.private,
            deprecated: self.deprecated,
        };
        MethodInfo::new(
            MethodSignature {
                name: self.name.clone(),
                return_type: self.returns.clone(),
                parameters,
            },
            modifiers,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestParam {
    #[serde(rename = "type")]
    ty: TypeRef,
    #[serde(default)]
    name: Option<String>,
}

/// A type loaded from a manifest, with its code source already resolved
#[derive(Debug, Clone)]
struct LoadedType {
    decl: ManifestType,
    code_source: Option<PathBuf>,
    origin: PathBuf,
}

/// Introspection oracle backed by JSON manifests
#[derive(Debug, Default)]
pub struct ManifestIntrospector {
    /// Loaded types by canonical name
    types: HashMap<String, LoadedType>,
}

impl ManifestIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every manifest in `paths`
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut introspector = Self::new();
        for path in paths {
            introspector.load_file(path.as_ref())?;
        }
        Ok(introspector)
    }

    /// Load a manifest file, returning the number of types it declared
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::Manifest(format!("Failed to read manifest {}: {}", path.display(), e))
        })?;
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        self.load_str(&source, &base, path)
    }

    /// Load manifest text; relative code sources resolve against `base`
    pub fn load_str(&mut self, source: &str, base: &Path, origin: &Path) -> Result<usize> {
        let manifest: ManifestFile = serde_json::from_str(source).map_err(|e| {
            Error::Manifest(format!("Malformed manifest {}: {}", origin.display(), e))
        })?;

        let count = manifest.types.len();
        for decl in manifest.types {
            if let Some(existing) = self.types.get(&decl.name) {
                return Err(Error::Manifest(format!(
                    "Duplicate type {} in {} (first declared in {})",
                    decl.name,
                    origin.display(),
                    existing.origin.display()
                )));
            }
            let code_source = decl
                .code_source
                .as_ref()
                .or(manifest.code_source.as_ref())
                .map(|p| base.join(p));
            debug!("Registered {} from {}", decl.name, origin.display());
            self.types.insert(
                decl.name.clone(),
                LoadedType { decl, code_source, origin: origin.to_path_buf() },
            );
        }
        Ok(count)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    fn lookup(&self, name: &str) -> Result<&LoadedType> {
        self.types
            .get(name)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown type: {}", name)))
    }

    /// Collect public member methods of `name`, most specific declaration first
    fn collect_methods(
        &self,
        name: &str,
        inherited: bool,
        stack: &mut Vec<String>,
        seen: &mut HashSet<(String, Vec<String>)>,
        out: &mut Vec<MethodInfo>,
    ) -> Result<()> {
        if stack.iter().any(|n| n == name) {
            return Err(Error::InvalidInput(format!(
                "Cyclic interface hierarchy: {} -> {}",
                stack.join(" -> "),
                name
            )));
        }
        let loaded = self.lookup(name)?;

        for method in &loaded.decl.methods {
            let info = method.to_info();
            // Static and private members are not inherited
            if inherited && (info.modifiers.is_static || info.modifiers.is_private) {
                continue;
            }
            if seen.insert(info.signature.erasure_key()) {
                out.push(info);
            }
        }

        stack.push(name.to_string());
        for parent in &loaded.decl.extends {
            self.collect_methods(parent, true, stack, seen, out)?;
        }
        stack.pop();
        Ok(())
    }
}

impl Introspector for ManifestIntrospector {
    fn describe(&self, identifier: &str) -> Result<TypeDescriptor> {
        let loaded = self.lookup(identifier)?;
        let decl = &loaded.decl;

        let (inferred_package, simple_name) = split_canonical(&decl.name);
        let package_name = decl.package.clone().unwrap_or_else(|| inferred_package.to_string());

        let mut methods = Vec::new();
        let mut seen = HashSet::new();
        self.collect_methods(identifier, false, &mut Vec::new(), &mut seen, &mut methods)?;

        Ok(TypeDescriptor {
            canonical_name: decl.name.clone(),
            package_name,
            simple_name: simple_name.to_string(),
            kind: decl.kind,
            visibility: decl.visibility,
            methods,
            code_source: loaded.code_source.clone(),
        })
    }
}
