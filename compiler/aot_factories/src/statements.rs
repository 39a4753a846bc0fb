//! Accumulation of the registry's static initialization statements.
//!
//! Producers append statements in call order; nothing reorders or removes
//! them. The block is finalized exactly once, when the registry type is
//! assembled.

use aot_ir::{CodeBlock, CodeBlockBuilder};

/// Append-only buffer of initialization statements.
#[derive(Debug, Default)]
pub struct StatementAccumulator {
    builder: CodeBlockBuilder,
    finalized: bool,
}

impl StatementAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one statement at the end of the block.
    ///
    /// # Panics
    ///
    /// Panics if the block was already finalized.
    pub fn append(&mut self, statement: impl Into<String>) -> &mut Self {
        assert!(
            !self.finalized,
            "statement appended after the static block was finalized"
        );
        let statement = statement.into();
        tracing::trace!(index = self.builder.len(), %statement, "appending static statement");
        self.builder.add_statement(statement);
        self
    }

    /// Number of statements appended so far.
    pub fn len(&self) -> usize {
        self.builder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Freeze the accumulated statements.
    ///
    /// # Panics
    ///
    /// Panics on a second call. A registry assembled twice would hand the
    /// emitter an empty initializer the second time.
    pub fn finalize(&mut self) -> StatementBlock {
        assert!(!self.finalized, "static block finalized more than once");
        self.finalized = true;
        let block = std::mem::take(&mut self.builder).build();
        tracing::debug!(statements = block.len(), "static block finalized");
        StatementBlock(block)
    }
}

/// Finalized, immutable initialization statements.
///
/// Consumed by value when the registry type is assembled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatementBlock(CodeBlock);

impl StatementBlock {
    /// Statements in append order.
    pub fn statements(&self) -> &[String] {
        self.0.statements()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_code_block(self) -> CodeBlock {
        self.0
    }
}
