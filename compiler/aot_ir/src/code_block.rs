//! Ordered blocks of pre-rendered statements.

/// An immutable, ordered sequence of statements.
///
/// Each statement is an opaque fragment of source without its trailing
/// terminator (`;`). Order is exactly the order statements were added.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBlock {
    statements: Vec<String>,
}

impl CodeBlock {
    /// Start building a new block.
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// A block with a single statement.
    pub fn of(statement: impl Into<String>) -> Self {
        CodeBlock {
            statements: vec![statement.into()],
        }
    }

    /// Statements in order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the block has no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Copy this block into a builder for extension.
    pub fn to_builder(&self) -> CodeBlockBuilder {
        CodeBlockBuilder {
            statements: self.statements.clone(),
        }
    }
}

/// Append-only builder for [`CodeBlock`].
#[derive(Clone, Debug, Default)]
pub struct CodeBlockBuilder {
    statements: Vec<String>,
}

impl CodeBlockBuilder {
    /// Append one statement.
    pub fn add_statement(&mut self, statement: impl Into<String>) -> &mut Self {
        self.statements.push(statement.into());
        self
    }

    /// Number of statements added so far.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if no statements have been added.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Freeze the builder into a block.
    pub fn build(self) -> CodeBlock {
        CodeBlock {
            statements: self.statements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let mut builder = CodeBlock::builder();
        builder.add_statement("a()").add_statement("b()");
        builder.add_statement("c()");
        let block = builder.build();
        assert_eq!(block.statements(), ["a()", "b()", "c()"]);
        assert_eq!(block.len(), 3);
    }

    #[test]
    fn test_to_builder_extends_copy() {
        let block = CodeBlock::of("first()");
        let mut builder = block.to_builder();
        builder.add_statement("second()");
        let extended = builder.build();

        assert_eq!(block.statements(), ["first()"]);
        assert_eq!(extended.statements(), ["first()", "second()"]);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(CodeBlock::default().is_empty());
        assert!(CodeBlock::builder().is_empty());
    }
}
