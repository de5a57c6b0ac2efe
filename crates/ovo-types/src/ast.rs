//! AST node types for the Ovo language.
//!
//! Every syntactic category is an explicit tagged variant (statement kinds,
//! expression kinds, literal kinds) dispatched by pattern matching, never by
//! probing which optional child is present. Nodes carry a [`Span`] attached
//! by the external parser. Large recursive types are boxed to keep enum
//! sizes reasonable.

use crate::Span;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A complete Ovo program: class declarations in source order, then the
/// top-level main block.
///
/// Declaration order matters: a class must appear after its superclass.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub classes: Vec<ClassDecl>,
    pub main: MainDecl,
    pub span: Span,
}

/// The top-level main block.
#[derive(Debug, Clone, PartialEq)]
pub struct MainDecl {
    pub body: Block,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Identifiers
// ══════════════════════════════════════════════════════════════════════════════

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Class Declarations
// ══════════════════════════════════════════════════════════════════════════════

/// `class Name [inherits Base] { members }`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Ident,
    /// Superclass name, if the class inherits. Resolution against the class
    /// table happens in the backends, not here.
    pub superclass: Option<Ident>,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

/// A single element of a class body.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Attribute(AttributeDecl),
    Constructor(ConstructorDecl),
    Method(MethodDecl),
}

/// An attribute declaration: `name: type`. Attributes have no initializer;
/// they default to the unset sentinel until first written.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDecl {
    pub name: Ident,
    pub type_name: Ident,
    pub span: Span,
}

/// A constructor declaration with its typed parameter list.
///
/// Only the transpiler consumes constructors; the interpreter binds
/// create-statement arguments positionally to declared attributes instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub params: Vec<TypedParam>,
    pub span: Span,
}

/// A method declaration: `method name(params) { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: Ident,
    pub params: Vec<TypedParam>,
    pub body: Block,
    pub span: Span,
}

/// A typed parameter: `name: type`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedParam {
    pub name: Ident,
    pub type_name: Ident,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// `{ statements... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// A statement in a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `create var = new Class(args...)`
    Create(CreateStmt),
    /// `target = expr`; target is a plain name or a member access
    Assign(AssignStmt),
    /// `print expr`
    Print(PrintStmt),
    /// `if cond { ... } [else { ... }]`
    If(IfStmt),
    /// Post-test loop: body first, repeat while the condition is false
    Loop(LoopStmt),
    /// `return [expr]`
    Return(ReturnStmt),
    /// A bare expression statement (typically a method call)
    Expr(ExprStmt),
}

/// `create var = new Class(args...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStmt {
    pub var: Ident,
    pub class_name: Ident,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// `target = value`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: AssignTarget,
    pub value: Expr,
    pub span: Span,
}

/// The left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    /// `x = ...`
    Variable(Ident),
    /// `obj.attr = ...` or `self.attr = ...`
    Member(MemberAccess),
}

/// `print expr`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub value: Expr,
    pub span: Span,
}

/// `if cond { then } [else { else }]`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: LogicalExpr,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

/// The post-test loop: executes `body` once, then repeats while `until`
/// evaluates false. Terminates when the condition becomes true.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopStmt {
    pub body: Block,
    pub until: LogicalExpr,
    pub span: Span,
}

/// `return [expr]`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// A bare expression statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Value Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An expression node. Uses `Box` for recursive variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // ── Literals ──
    /// `42`
    IntLit(i64),
    /// `3.14`
    FloatLit(f64),
    /// `true` / `false`
    BoolLit(bool),
    /// `'a'`
    CharLit(char),
    /// `"hello"` (unescaped text, quotes stripped)
    StringLit(String),

    // ── References & Calls ──
    /// `my_var`
    Variable(String),
    /// `obj.attr` or `self.attr`
    Member(MemberAccess),
    /// `obj.method(args...)`
    Call(MethodCall),

    // ── Operators & Grouping ──
    /// `a + b`, `a % b`, ...
    Binary {
        left: Box<Expr>,
        op: ArithOp,
        right: Box<Expr>,
    },
    /// `(expr)`
    Paren(Box<Expr>),
}

/// An attribute access: `receiver.attribute`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberAccess {
    pub receiver: Receiver,
    pub attribute: Ident,
    pub span: Span,
}

/// `obj.method(args...)`. The receiver of a call is always a plain
/// variable name in the source grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub object: Ident,
    pub method: Ident,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// The base of a member access.
#[derive(Debug, Clone, PartialEq)]
pub enum Receiver {
    /// `self`, resolving to the current-instance context
    SelfRef(Span),
    /// A named variable holding an instance
    Variable(Ident),
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    /// Returns the operator symbol for diagnostics and re-rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Mod => "%",
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Logical Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// A condition: an n-ary disjunction of terms, evaluated left to right with
/// short-circuit semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub terms: Vec<LogicalTerm>,
    pub span: Span,
}

/// An n-ary conjunction of factors, evaluated left to right with
/// short-circuit semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalTerm {
    pub factors: Vec<LogicalFactor>,
    pub span: Span,
}

/// A single factor of a conjunction.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalFactor {
    /// `a < b`, `a == b`, ...
    Comparison(Comparison),
    /// A parenthesized nested condition
    Nested(Box<LogicalExpr>),
    /// A bare value expression, tested for truthiness
    Value(Expr),
}

/// `left op right`
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: Expr,
    pub op: CmpOp,
    pub right: Expr,
    pub span: Span,
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    NotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
}

impl CmpOp {
    /// Returns the operator symbol for diagnostics and re-rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::NotEq => "!=",
            CmpOp::Less => "<",
            CmpOp::Greater => ">",
            CmpOp::LessEq => "<=",
            CmpOp::GreaterEq => ">=",
        }
    }
}
