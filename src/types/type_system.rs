//! Type references as they appear in interface signatures

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Primitive types of the target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order
    pub const ALL: [PrimitiveKind; 9] = [
        Self::Boolean, Self::Byte, Self::Short, Self::Char,
        Self::Int, Self::Long, Self::Float, Self::Double,
        Self::Void,
    ];

    /// Source keyword for this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Char => "char",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.keyword() == keyword)
    }

    /// Check if this is a numeric type (char counts, as on the platform)
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Boolean | Self::Void)
    }
}

/// A reference to a type by its canonical source form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    /// Class, interface or array type, e.g. `java.lang.String` or `int[]`
    Reference(String),
}

impl TypeRef {
    pub const VOID: Self = Self::Primitive(PrimitiveKind::Void);
    pub const BOOLEAN: Self = Self::Primitive(PrimitiveKind::Boolean);
    pub const INT: Self = Self::Primitive(PrimitiveKind::Int);
    pub const DOUBLE: Self = Self::Primitive(PrimitiveKind::Double);

    /// Parse a canonical type name; primitive keywords map to primitives
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match PrimitiveKind::from_keyword(text) {
            Some(kind) => Self::Primitive(kind),
            None => Self::Reference(text.to_string()),
        }
    }

    pub fn reference(name: &str) -> Self {
        Self::Reference(name.to_string())
    }

    /// Text usable in generated source
    pub fn canonical(&self) -> &str {
        match self {
            Self::Primitive(kind) => kind.keyword(),
            Self::Reference(name) => name,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveKind::Void))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical())
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.trim().is_empty() {
            return Err(serde::de::Error::custom("empty type name"));
        }
        Ok(Self::parse(&text))
    }
}
