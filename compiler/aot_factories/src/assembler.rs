//! Assembly of the static registry type.
//!
//! The registry is declared as:
//!
//! ```text
//! /** Class generated - do not edit this file */
//! public abstract class StaticSpringFactories {
//!     public static MultiValueMap<Class<?>, Supplier<Object>> factories =
//!         new LinkedMultiValueMap();
//!     public static MultiValueMap<Class<?>, String> names = new LinkedMultiValueMap();
//!     static { /* finalized statements, in order */ }
//! }
//! ```
//!
//! The maps are never materialized by the generator; the static block fills
//! them when the generated program loads the type.

use aot_ir::{ClassName, FieldDecl, Modifiers, SourceFile, TypeDecl, TypeName};

use crate::{StatementBlock, REGISTRY_PACKAGE, REGISTRY_TYPE_NAME};

/// Field holding contract → supplier lists.
pub(crate) const FACTORIES_FIELD: &str = "factories";

/// Field holding contract → implementation name lists.
pub(crate) const NAMES_FIELD: &str = "names";

const REGISTRY_DOC: &str = "Class generated - do not edit this file";

fn multi_value_map() -> ClassName {
    ClassName::new("org.springframework.util", "MultiValueMap")
}

fn linked_multi_value_map() -> ClassName {
    ClassName::new("org.springframework.util", "LinkedMultiValueMap")
}

fn java_lang(simple: &str) -> TypeName {
    TypeName::Class(ClassName::new("java.lang", simple))
}

/// `Class<?>`
fn any_class() -> TypeName {
    TypeName::parameterized(ClassName::new("java.lang", "Class"), [TypeName::Wildcard])
}

/// Builds the registry type from a finalized statement block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryAssembler {
    package: String,
    type_name: String,
}

impl Default for RegistryAssembler {
    fn default() -> Self {
        RegistryAssembler {
            package: REGISTRY_PACKAGE.to_string(),
            type_name: REGISTRY_TYPE_NAME.to_string(),
        }
    }
}

impl RegistryAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the registry under a different package and type name.
    #[must_use]
    pub fn with_target(mut self, package: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.package = package.into();
        self.type_name = type_name.into();
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Type of the `factories` field: `MultiValueMap<Class<?>, Supplier<Object>>`.
    pub fn factories_type() -> TypeName {
        let supplier = ClassName::new("java.util.function", "Supplier");
        TypeName::parameterized(
            multi_value_map(),
            [
                any_class(),
                TypeName::parameterized(supplier, [java_lang("Object")]),
            ],
        )
    }

    /// Type of the `names` field: `MultiValueMap<Class<?>, String>`.
    pub fn names_type() -> TypeName {
        TypeName::parameterized(multi_value_map(), [any_class(), java_lang("String")])
    }

    /// Build the registry source file.
    ///
    /// Always succeeds. An empty block still yields both fields and an empty
    /// static initializer.
    pub fn assemble(&self, block: StatementBlock) -> SourceFile {
        let initializer = format!("new {}()", linked_multi_value_map());
        let factories = FieldDecl::new(Self::factories_type(), FACTORIES_FIELD)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC)
            .with_initializer(initializer.clone());
        let names = FieldDecl::new(Self::names_type(), NAMES_FIELD)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC)
            .with_initializer(initializer);

        tracing::debug!(
            package = %self.package,
            type_name = %self.type_name,
            statements = block.len(),
            "assembling static registry"
        );

        let mut builder = TypeDecl::class_builder(self.type_name.as_str());
        builder
            .add_modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT)
            .add_field(factories)
            .add_field(names)
            .static_block(block.into_code_block())
            .doc(REGISTRY_DOC);

        SourceFile::new(self.package.as_str(), builder.build())
    }
}
