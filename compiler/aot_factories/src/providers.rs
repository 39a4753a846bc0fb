//! Per-package provider holder registry.
//!
//! Each package that needs accessors for non-public constructors gets one
//! `_FactoryProvider` type. Holders are immutable [`TypeDecl`]s; changing one
//! is an explicit read-modify-write through [`FactoryProviderRegistry::update`].
//!
//! # Lookup vs. update
//!
//! - [`get`](FactoryProviderRegistry::get) never registers anything. Asking for
//!   a package that has no holder yields the default shape and leaves the
//!   registry untouched.
//! - [`update`](FactoryProviderRegistry::update) always writes back, replacing
//!   the previous holder for that package wholesale.

use std::borrow::Cow;

use aot_ir::{Modifiers, TypeDecl, TypeDeclBuilder};
use rustc_hash::FxHashMap;

use crate::PROVIDER_TYPE_NAME;

/// One generated provider holder type and the package it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProviderHolder {
    package: String,
    ty: TypeDecl,
}

impl ProviderHolder {
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn ty(&self) -> &TypeDecl {
        &self.ty
    }
}

/// Mapping from package name to its provider holder.
///
/// Iteration order is the order in which packages were first updated.
/// Replacing a holder keeps its position.
#[derive(Clone, Debug, Default)]
pub struct FactoryProviderRegistry {
    holders: Vec<ProviderHolder>,
    /// Package name → index into `holders`.
    index: FxHashMap<String, usize>,
}

impl FactoryProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape of a holder that nothing has written to yet: `public abstract`,
    /// no members.
    pub fn default_holder() -> TypeDecl {
        let mut builder = TypeDecl::class_builder(PROVIDER_TYPE_NAME);
        builder.add_modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT);
        builder.build()
    }

    /// Holder for `package`, or the default shape if none is registered.
    ///
    /// Does not register the default.
    pub fn get(&self, package: &str) -> Cow<'_, TypeDecl> {
        match self.index.get(package) {
            Some(&idx) => Cow::Borrowed(&self.holders[idx].ty),
            None => Cow::Owned(Self::default_holder()),
        }
    }

    /// Apply `mutator` to a copy of the current holder for `package` and
    /// store the result, replacing the previous holder.
    ///
    /// Successive updates compose: each mutator starts from what the
    /// previous update for the same package wrote.
    pub fn update<F>(&mut self, package: &str, mutator: F)
    where
        F: FnOnce(&mut TypeDeclBuilder),
    {
        let mut builder = self.get(package).to_builder();
        mutator(&mut builder);
        let ty = builder.build();

        tracing::debug!(
            package,
            methods = ty.methods().len(),
            fields = ty.fields().len(),
            "provider holder updated"
        );

        if let Some(&idx) = self.index.get(package) {
            self.holders[idx].ty = ty;
        } else {
            self.index.insert(package.to_string(), self.holders.len());
            self.holders.push(ProviderHolder {
                package: package.to_string(),
                ty,
            });
        }
    }

    /// Every registered holder, in registry order.
    pub fn all(&self) -> &[ProviderHolder] {
        &self.holders
    }

    /// Whether `package` has been written by [`update`](Self::update).
    pub fn contains(&self, package: &str) -> bool {
        self.index.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }
}

#[cfg(test)]
mod tests;
