//! Ovo tree-walking interpreter: executes programs directly from the typed AST.
//!
//! This crate owns the runtime half of the semantic model (the value kinds,
//! the class table built by the one-time class-declaration pass, instance
//! field stores, and the flat global variable environment) plus the
//! statement/expression walker that executes against them. The Java
//! transpiler in `ovo-javagen` walks the same tree without evaluating.
//!
//! The AST is borrowed, never cloned: the class table holds non-owning
//! references to method bodies, so the tree must outlive the interpreter.

pub mod classes;
pub mod env;
pub mod interpreter;
pub mod value;

pub use classes::{ClassDef, ClassTable, Instance};
pub use env::Environment;
pub use interpreter::{interpret, Interpreter};
pub use value::Value;
