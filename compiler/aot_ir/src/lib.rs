//! AOT IR - In-memory model of generated source types
//!
//! This crate contains the data structures the AOT factories generator builds
//! and hands to an artifact emitter:
//! - `ClassName` / `TypeName` for referring to types of the generated program
//! - `Modifiers` for declaration visibility and storage
//! - `CodeBlock` for ordered, pre-rendered statements
//! - `FieldDecl`, `MethodDecl`, `TypeDecl` for type declarations
//! - `SourceFile` for a type placed in its package
//!
//! # Design Philosophy
//!
//! - **Describe, don't render**: every type here is a plain description. Turning
//!   it into source text is the emitter's job.
//! - **Owned builders**: declarations are immutable once built. Changing one
//!   means `to_builder()`, mutate, `build()`.
//! - **Opaque statements**: statements and initializers are pre-rendered
//!   fragments and are never parsed or validated here.

mod code_block;
mod decl;
mod modifiers;
mod name;
mod source_file;

pub use code_block::{CodeBlock, CodeBlockBuilder};
pub use decl::{FieldDecl, MethodDecl, TypeDecl, TypeDeclBuilder};
pub use modifiers::Modifiers;
pub use name::{ClassName, ModelError, TypeName};
pub use source_file::SourceFile;
