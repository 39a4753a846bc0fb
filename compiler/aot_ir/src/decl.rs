//! Field, method, and type declarations.
//!
//! `TypeDecl` is immutable. Callers that need to change one go through
//! [`TypeDecl::to_builder`], mutate the owned builder, and `build()` a new
//! declaration. Nothing here shares state between copies.

use crate::{CodeBlock, Modifiers, TypeName};

/// A field declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct FieldDecl {
    name: String,
    ty: TypeName,
    modifiers: Modifiers,
    initializer: Option<String>,
}

impl FieldDecl {
    /// Create a field with no modifiers and no initializer.
    pub fn new(ty: TypeName, name: impl Into<String>) -> Self {
        FieldDecl {
            name: name.into(),
            ty,
            modifiers: Modifiers::empty(),
            initializer: None,
        }
    }

    /// Add modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Set the initializer expression.
    pub fn with_initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn initializer(&self) -> Option<&str> {
        self.initializer.as_deref()
    }
}

/// A method declaration with no parameters.
///
/// Everything the generator declares is a zero-argument accessor, so
/// parameters are not modelled.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct MethodDecl {
    name: String,
    return_type: TypeName,
    modifiers: Modifiers,
    body: CodeBlock,
}

impl MethodDecl {
    /// Create a `void` method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        MethodDecl {
            name: name.into(),
            return_type: TypeName::Void,
            modifiers: Modifiers::empty(),
            body: CodeBlock::default(),
        }
    }

    /// Add modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeName) -> Self {
        self.return_type = ty;
        self
    }

    /// Set the method body.
    pub fn with_body(mut self, body: CodeBlock) -> Self {
        self.body = body;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &TypeName {
        &self.return_type
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn body(&self) -> &CodeBlock {
        &self.body
    }
}

/// A class declaration.
///
/// Members keep the order they were added in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    name: String,
    modifiers: Modifiers,
    doc: Option<String>,
    fields: Vec<FieldDecl>,
    methods: Vec<MethodDecl>,
    static_block: Option<CodeBlock>,
}

impl TypeDecl {
    /// Start a class declaration.
    pub fn class_builder(name: impl Into<String>) -> TypeDeclBuilder {
        TypeDeclBuilder {
            decl: TypeDecl {
                name: name.into(),
                modifiers: Modifiers::empty(),
                doc: None,
                fields: Vec::new(),
                methods: Vec::new(),
                static_block: None,
            },
        }
    }

    /// Copy this declaration into a builder.
    ///
    /// The builder owns its copy; `self` is unaffected by later mutation.
    pub fn to_builder(&self) -> TypeDeclBuilder {
        TypeDeclBuilder { decl: self.clone() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodDecl] {
        &self.methods
    }

    /// The static initializer, if one was attached (possibly empty).
    pub fn static_block(&self) -> Option<&CodeBlock> {
        self.static_block.as_ref()
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up the first method with the given name.
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// Whether the type declares no members and no static initializer.
    pub fn has_no_members(&self) -> bool {
        self.fields.is_empty() && self.methods.is_empty() && self.static_block.is_none()
    }
}

/// Mutable builder for [`TypeDecl`].
#[derive(Clone, Debug)]
pub struct TypeDeclBuilder {
    decl: TypeDecl,
}

impl TypeDeclBuilder {
    pub fn add_modifiers(&mut self, modifiers: Modifiers) -> &mut Self {
        self.decl.modifiers |= modifiers;
        self
    }

    pub fn doc(&mut self, doc: impl Into<String>) -> &mut Self {
        self.decl.doc = Some(doc.into());
        self
    }

    pub fn add_field(&mut self, field: FieldDecl) -> &mut Self {
        self.decl.fields.push(field);
        self
    }

    pub fn add_method(&mut self, method: MethodDecl) -> &mut Self {
        self.decl.methods.push(method);
        self
    }

    /// Attach the static initializer, replacing any previous one.
    pub fn static_block(&mut self, block: CodeBlock) -> &mut Self {
        self.decl.static_block = Some(block);
        self
    }

    /// Whether a method with this name has already been added.
    pub fn has_method(&self, name: &str) -> bool {
        self.decl.has_method(name)
    }

    /// First method added under this name.
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.decl.method(name)
    }

    pub fn build(self) -> TypeDecl {
        self.decl
    }
}
