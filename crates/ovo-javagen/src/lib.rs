//! Ovo Java transpiler: emits equivalent Java source text from the typed AST.
//!
//! The transpiler mirrors the interpreter's tree traversal but accumulates
//! output lines instead of evaluating. It performs no type checking and no
//! runtime evaluation; when the source program is ill-typed under Java's
//! static rules, the emitted Java is too, and fails at javac's own compile
//! time rather than here. Translation itself is infallible.
//!
//! Output shape: one `class` declaration per source class (attributes typed
//! through the fixed name map in [`types`]), then a `Main` class whose
//! `public static void main` body is the translated top-level block.

pub mod expr;
pub mod stmt;
pub mod translator;
pub mod types;

pub use translator::{translate, Translator};
pub use types::java_type;
