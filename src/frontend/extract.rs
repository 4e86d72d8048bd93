//! Signature extraction - the abstract method surface of an interface

use crate::types::{InterfaceDescriptor, MethodSignature};

/// Every abstract member method, in the oracle's enumeration order.
///
/// Default, static and private members already have bodies and are skipped.
/// Deprecated methods are kept: a stub that omits them would not compile.
pub fn extract_abstract_methods(descriptor: &InterfaceDescriptor) -> Vec<MethodSignature> {
    descriptor
        .methods()
        .iter()
        .filter(|method| method.modifiers.is_abstract)
        .map(|method| method.signature.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MethodInfo, MethodModifiers, Parameter, TypeDescriptor, TypeRef};

    fn sig(name: &str) -> MethodSignature {
        MethodSignature::new(name, TypeRef::VOID, vec![])
    }

    fn iface(methods: Vec<MethodInfo>) -> InterfaceDescriptor {
        InterfaceDescriptor::try_from(TypeDescriptor::interface("demo.Api", methods)).unwrap()
    }

    #[test]
    fn test_filters_non_abstract() {
        let descriptor = iface(vec![
            MethodInfo::abstract_method(sig("open")),
            MethodInfo::new(
                sig("helper"),
                MethodModifiers { is_default: true, ..Default::default() },
            ),
            MethodInfo::new(
                sig("create"),
                MethodModifiers { is_static: true, ..Default::default() },
            ),
            MethodInfo::new(
                sig("check"),
                MethodModifiers { is_private: true, ..Default::default() },
            ),
            MethodInfo::abstract_method(sig("close")),
        ]);
        let names: Vec<_> = extract_abstract_methods(&descriptor)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["open", "close"]);
    }

    #[test]
    fn test_keeps_deprecated() {
        let modifiers = MethodModifiers { deprecated: true, ..MethodModifiers::abstract_method() };
        let descriptor = iface(vec![MethodInfo::new(sig("legacy"), modifiers)]);
        assert_eq!(extract_abstract_methods(&descriptor).len(), 1);
    }

    #[test]
    fn test_empty_interface() {
        assert!(extract_abstract_methods(&iface(vec![])).is_empty());
    }

    #[test]
    fn test_preserves_parameters() {
        let params = vec![
            Parameter::new(TypeRef::reference("java.lang.String"), "key"),
            Parameter::new(TypeRef::INT, "count"),
        ];
        let descriptor = iface(vec![MethodInfo::abstract_method(MethodSignature::new(
            "put",
            TypeRef::BOOLEAN,
            params.clone(),
        ))]);
        assert_eq!(extract_abstract_methods(&descriptor)[0].parameters, params);
    }
}
