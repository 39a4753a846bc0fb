//! Names of types in the generated program.
//!
//! `ClassName` is a fully qualified reference to a declared type, possibly
//! nested. `TypeName` adds the shapes needed for field and method signatures
//! (generic instantiations, wildcards, `void`).

use std::fmt;

/// Error when building a name from an invalid qualified string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The qualified name was empty.
    EmptyName,
    /// A dot-separated segment is not a valid identifier.
    InvalidSegment { name: String, segment: String },
    /// No segment starts with an uppercase letter, so no simple name could be found.
    MissingSimpleName { name: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyName => write!(f, "qualified type name is empty"),
            ModelError::InvalidSegment { name, segment } => {
                write!(f, "invalid segment '{segment}' in type name '{name}'")
            }
            ModelError::MissingSimpleName { name } => write!(
                f,
                "type name '{name}' has no simple name (expected an uppercase segment)"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

/// Fully qualified name of a class or interface.
///
/// A top-level type has one simple name; each nested type adds one more.
/// The package may be empty (default package).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Create a top-level class name.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        let simple_name = simple_name.into();
        debug_assert!(!simple_name.is_empty(), "empty simple name");
        ClassName {
            package: package.into(),
            simple_names: vec![simple_name],
        }
    }

    /// Create the name of a type nested inside this one.
    #[must_use]
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let simple_name = simple_name.into();
        debug_assert!(!simple_name.is_empty(), "empty simple name");
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name);
        ClassName {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// Parse a dotted name such as `java.util.Map.Entry`.
    ///
    /// Leading segments up to the first one that starts with an uppercase
    /// letter form the package; that segment and the rest are simple names.
    pub fn parse(qualified: &str) -> Result<Self, ModelError> {
        if qualified.is_empty() {
            return Err(ModelError::EmptyName);
        }

        let segments: Vec<&str> = qualified.split('.').collect();
        if let Some(bad) = segments.iter().find(|s| !is_identifier(s)) {
            return Err(ModelError::InvalidSegment {
                name: qualified.to_string(),
                segment: (*bad).to_string(),
            });
        }

        let Some(first_type) = segments
            .iter()
            .position(|s| s.starts_with(|c: char| c.is_ascii_uppercase()))
        else {
            return Err(ModelError::MissingSimpleName {
                name: qualified.to_string(),
            });
        };

        Ok(ClassName {
            package: segments[..first_type].join("."),
            simple_names: segments[first_type..]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        })
    }

    /// Package this type lives in (empty for the default package).
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Innermost simple name.
    pub fn simple_name(&self) -> &str {
        // Constructors guarantee at least one simple name.
        self.simple_names.last().map_or("", String::as_str)
    }

    /// All simple names, outermost first.
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// Whether this is a nested type.
    pub fn is_nested(&self) -> bool {
        self.simple_names.len() > 1
    }

    /// Name as written in source: `pkg.Outer.Inner`.
    pub fn canonical_name(&self) -> String {
        self.qualify(".")
    }

    /// Name as seen by runtime reflection: `pkg.Outer$Inner`.
    pub fn reflection_name(&self) -> String {
        self.qualify("$")
    }

    fn qualify(&self, nested_separator: &str) -> String {
        let simple = self.simple_names.join(nested_separator);
        if self.package.is_empty() {
            simple
        } else {
            format!("{}.{simple}", self.package)
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// A type as it appears in a declaration signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeName {
    /// `void`, only meaningful as a method return type.
    Void,
    /// A plain class reference.
    Class(ClassName),
    /// A generic instantiation: `Raw<A, B>`.
    Parameterized {
        raw: ClassName,
        arguments: Vec<TypeName>,
    },
    /// The unbounded wildcard `?`.
    Wildcard,
}

impl TypeName {
    /// Build a parameterized type.
    pub fn parameterized(raw: ClassName, arguments: impl IntoIterator<Item = TypeName>) -> Self {
        TypeName::Parameterized {
            raw,
            arguments: arguments.into_iter().collect(),
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(name: ClassName) -> Self {
        TypeName::Class(name)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Void => f.write_str("void"),
            TypeName::Class(name) => write!(f, "{name}"),
            TypeName::Parameterized { raw, arguments } => {
                write!(f, "{raw}<")?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeName::Wildcard => f.write_str("?"),
        }
    }
}

/// Identifier check for name segments (`$` and `_` allowed, no leading digit).
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests;
