//! The generator facade owned by one build step.
//!
//! `CodeGenerator` ties the pieces together:
//! - options become the first statements of the static block
//! - producers append statements and update provider holders
//! - the registry is assembled once, at the end
//!
//! There is no shared or global state. Producers receive `&mut CodeGenerator`
//! and calls are applied in the order they are made.

use std::borrow::Cow;

use aot_ir::{SourceFile, TypeDecl, TypeDeclBuilder};

use crate::{
    FactoryBinding, FactoryProviderRegistry, GeneratorOptions, RegistryAssembler,
    StatementAccumulator,
};

/// Everything the generator hands to the artifact emitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    /// The static registry type.
    pub registry: SourceFile,
    /// One provider holder per package that declares members.
    pub providers: Vec<SourceFile>,
}

/// Accumulates registry statements and provider holders for one build.
#[derive(Debug)]
pub struct CodeGenerator {
    static_block: StatementAccumulator,
    providers: FactoryProviderRegistry,
    assembler: RegistryAssembler,
}

impl CodeGenerator {
    /// Create a generator whose static block starts with the option directives.
    pub fn new(options: &GeneratorOptions) -> Self {
        Self::with_assembler(options, RegistryAssembler::default())
    }

    /// Like [`new`](Self::new), with a custom registry target.
    pub fn with_assembler(options: &GeneratorOptions, assembler: RegistryAssembler) -> Self {
        let mut static_block = StatementAccumulator::new();
        for directive in options.directives() {
            tracing::debug!(key = directive.key, value = directive.value, "option directive");
            static_block.append(directive.statement());
        }
        CodeGenerator {
            static_block,
            providers: FactoryProviderRegistry::new(),
            assembler,
        }
    }

    /// Give `writer` append access to the registry's static block.
    pub fn write_to_static_block<F>(&mut self, writer: F)
    where
        F: FnOnce(&mut StatementAccumulator),
    {
        writer(&mut self.static_block);
    }

    /// Current provider holder for `package`, without registering it.
    pub fn static_factory_class(&self, package: &str) -> Cow<'_, TypeDecl> {
        self.providers.get(package)
    }

    /// Read-modify-write the provider holder for `package`.
    pub fn write_to_static_factory_class<F>(&mut self, package: &str, mutator: F)
    where
        F: FnOnce(&mut TypeDeclBuilder),
    {
        self.providers.update(package, mutator);
    }

    /// Register one binding.
    ///
    /// Non-public constructors first claim an accessor on the implementation
    /// package's holder; the supplier calls the name that was claimed. Then
    /// the supplier and name statements are appended, in that order.
    pub fn register_binding(&mut self, binding: &FactoryBinding) {
        tracing::debug!(
            contract = %binding.contract,
            implementation = %binding.implementation,
            accessor = binding.needs_accessor(),
            "registering factory binding"
        );

        let accessor = binding.needs_accessor().then(|| {
            let mut claimed = String::new();
            self.providers.update(binding.provider_package(), |holder| {
                claimed = binding.claim_accessor(holder);
            });
            claimed
        });

        self.static_block.append(binding.supplier_statement(accessor.as_deref()));
        self.static_block.append(binding.name_statement());
    }

    /// Register bindings in iteration order.
    pub fn register_bindings<'a, I>(&mut self, bindings: I)
    where
        I: IntoIterator<Item = &'a FactoryBinding>,
    {
        for binding in bindings {
            self.register_binding(binding);
        }
    }

    pub fn providers(&self) -> &FactoryProviderRegistry {
        &self.providers
    }

    /// Number of statements accumulated so far.
    pub fn statement_count(&self) -> usize {
        self.static_block.len()
    }

    /// Assemble the registry type.
    ///
    /// # Panics
    ///
    /// Panics if the registry was already generated.
    pub fn generate_static_factories(&mut self) -> SourceFile {
        let block = self.static_block.finalize();
        self.assembler.assemble(block)
    }

    /// Provider holder files, in registry order.
    ///
    /// Holders that were registered but declare no members are skipped;
    /// they would be empty types.
    pub fn generate_static_factory_classes(&self) -> Vec<SourceFile> {
        self.providers
            .all()
            .iter()
            .filter(|holder| !holder.ty().has_no_members())
            .map(|holder| SourceFile::new(holder.package(), holder.ty().clone()))
            .collect()
    }

    /// Finish the build and collect every artifact.
    ///
    /// # Panics
    ///
    /// Panics if [`generate_static_factories`](Self::generate_static_factories)
    /// was already called.
    pub fn into_artifacts(mut self) -> GeneratedArtifacts {
        let registry = self.generate_static_factories();
        let providers = self.generate_static_factory_classes();
        tracing::debug!(providers = providers.len(), "generation finished");
        GeneratedArtifacts {
            registry,
            providers,
        }
    }
}
