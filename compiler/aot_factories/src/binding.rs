//! Factory bindings and the statements they contribute.
//!
//! A binding says "`implementation` is a factory for `contract`". It turns
//! into two registry statements, a supplier and a name, plus an accessor on
//! the implementation package's provider holder when its constructor cannot be
//! called from the registry's package.

use aot_ir::{ClassName, CodeBlock, MethodDecl, Modifiers, TypeDeclBuilder, TypeName};

use crate::assembler::{FACTORIES_FIELD, NAMES_FIELD};
use crate::PROVIDER_TYPE_NAME;

/// Reserved words that cannot be used as accessor names.
const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// How the registry can reach an implementation's no-arg constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructorAccess {
    /// Public constructor; the registry instantiates directly.
    Public,
    /// Package-private or otherwise hidden; instantiation goes through an
    /// accessor on the package's provider holder.
    NonPublic,
}

/// A declared contract/implementation pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FactoryBinding {
    pub contract: ClassName,
    pub implementation: ClassName,
    pub constructor: ConstructorAccess,
}

impl FactoryBinding {
    pub fn new(
        contract: ClassName,
        implementation: ClassName,
        constructor: ConstructorAccess,
    ) -> Self {
        FactoryBinding {
            contract,
            implementation,
            constructor,
        }
    }

    /// Whether registering this binding writes to a provider holder.
    pub fn needs_accessor(&self) -> bool {
        self.constructor == ConstructorAccess::NonPublic
    }

    /// Package whose provider holder gets the accessor.
    pub fn provider_package(&self) -> &str {
        self.implementation.package()
    }

    /// Statement adding this binding's supplier to the `factories` map.
    ///
    /// `accessor` is the provider holder method chosen by
    /// [`claim_accessor`](Self::claim_accessor); it must be present exactly
    /// when the binding needs one.
    pub fn supplier_statement(&self, accessor: Option<&str>) -> String {
        debug_assert_eq!(
            accessor.is_some(),
            self.needs_accessor(),
            "accessor presence must match constructor access"
        );
        let instantiation = match accessor {
            Some(name) => {
                let holder = ClassName::new(self.provider_package(), PROVIDER_TYPE_NAME);
                format!("{holder}.{name}()")
            }
            None => format!("new {}()", self.implementation),
        };
        format!(
            "{FACTORIES_FIELD}.add({}.class, () -> {instantiation})",
            self.contract
        )
    }

    /// Statement adding the implementation's name to the `names` map.
    ///
    /// Uses the reflection name so the runtime can match it against loaded
    /// classes without instantiating them.
    pub fn name_statement(&self) -> String {
        format!(
            "{NAMES_FIELD}.add({}.class, \"{}\")",
            self.contract,
            self.implementation.reflection_name()
        )
    }

    /// `public static Object <name>() { return new <impl>(); }`
    ///
    /// The return type is `Object`: the implementation type may not be
    /// visible from the registry's package, and one accessor serves every
    /// contract the implementation is bound to.
    pub fn accessor_method(&self, name: &str) -> MethodDecl {
        MethodDecl::new(name)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::STATIC)
            .returns(TypeName::Class(ClassName::new("java.lang", "Object")))
            .with_body(CodeBlock::of(format!("return new {}()", self.implementation)))
    }

    /// Find or add this binding's accessor on `holder` and return its name.
    ///
    /// An identical accessor is reused. If the preferred name is taken by a
    /// method that builds something else, a numeric suffix (`2`, `3`, ...)
    /// is appended until the name is free or matches.
    pub fn claim_accessor(&self, holder: &mut TypeDeclBuilder) -> String {
        let base = accessor_name(&self.implementation);
        let mut candidate = base.clone();
        let mut suffix = 2u32;
        loop {
            let method = self.accessor_method(&candidate);
            match holder.method(&candidate) {
                None => {
                    holder.add_method(method);
                    return candidate;
                }
                Some(existing) if *existing == method => return candidate,
                Some(_) => {
                    tracing::trace!(taken = %candidate, "accessor name in use");
                    candidate = format!("{base}{suffix}");
                    suffix += 1;
                }
            }
        }
    }
}

/// Accessor method name for an implementation type.
///
/// Simple names joined with `_` (for nested types), first character
/// lowercased, suffixed with `_` if the result is a reserved word.
pub fn accessor_name(implementation: &ClassName) -> String {
    let joined = implementation.simple_names().join("_");
    let mut chars = joined.chars();
    let mut name = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    if KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }
    name
}
