//! Shared types for the Ovo toolchain.
//!
//! This crate defines the typed AST consumed by both backends (the
//! interpreter in `ovo-eval` and the Java transpiler in `ovo-javagen`),
//! source spans, and the shared fault type. Parsing is an external
//! collaborator: a parser produces these nodes and owns the tree for the
//! lifetime of a run; nothing in this workspace builds or validates grammar.

pub mod ast;
mod error;
mod span;

pub use error::{Fault, FaultCategory};
pub use span::Span;

/// Result type used by the Ovo backends.
pub type Result<T> = std::result::Result<T, Fault>;
