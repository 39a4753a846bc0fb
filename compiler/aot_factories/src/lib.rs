//! AOT factories generator
//!
//! Replaces reflective, configuration-file-driven factory discovery with
//! generated source. The generator produces two kinds of artifact:
//!
//! 1. **Static registry** - one type holding two ordered multimaps
//!    (contract → suppliers, contract → implementation names) populated by a
//!    single static initializer.
//! 2. **Provider holders** - one `_FactoryProvider` type per package, exposing
//!    accessors for implementations whose constructors the registry cannot
//!    reach directly.
//!
//! # Architecture
//!
//! ```text
//! GeneratorOptions + FactoryBindings
//!        ↓
//!   StatementAccumulator   (ordered, append-only static block)
//!   FactoryProviderRegistry (package → provider holder, read-modify-write)
//!        ↓
//!   RegistryAssembler      (one-shot: finalized block → registry type)
//!        ↓
//!   GeneratedArtifacts     (SourceFiles for an external emitter)
//! ```
//!
//! Everything is in-memory and single-threaded. A [`CodeGenerator`] is owned
//! by one build step and passed explicitly to every producer.

mod assembler;
mod binding;
mod generator;
mod options;
mod providers;
mod statements;

pub use assembler::RegistryAssembler;
pub use binding::{accessor_name, ConstructorAccess, FactoryBinding};
pub use generator::{CodeGenerator, GeneratedArtifacts};
pub use options::{GeneratorOptions, OptionsError, PropertyDirective};
pub use providers::{FactoryProviderRegistry, ProviderHolder};
pub use statements::{StatementAccumulator, StatementBlock};

use std::sync::Once;

/// Package of the generated registry type.
pub const REGISTRY_PACKAGE: &str = "org.springframework.aot";

/// Simple name of the generated registry type.
pub const REGISTRY_TYPE_NAME: &str = "StaticSpringFactories";

/// Simple name of every generated provider holder type.
pub const PROVIDER_TYPE_NAME: &str = "_FactoryProvider";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=aot_factories=debug` or `RUST_LOG=aot_factories=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
