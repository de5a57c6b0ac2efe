//! Statement emission.
//!
//! Each statement produces one or more output lines on the translator.
//! Statement lines are emitted at a fixed body indent; blocks do not nest
//! the indentation further, matching the line-oriented output contract.

use crate::expr::{render_args, render_expr, render_logical, render_member};
use crate::translator::Translator;
use ovo_types::ast::*;

/// Emit every statement of a block.
pub fn emit_block(block: &Block, t: &mut Translator) {
    for stmt in &block.stmts {
        emit_stmt(stmt, t);
    }
}

/// Emit a single statement.
pub fn emit_stmt(stmt: &Stmt, t: &mut Translator) {
    match stmt {
        Stmt::Create(create) => emit_create(create, t),
        Stmt::Assign(assign) => emit_assign(assign, t),
        Stmt::Print(print) => t.line(format!(
            "        System.out.println({});",
            render_expr(&print.value)
        )),
        Stmt::If(if_stmt) => emit_if(if_stmt, t),
        Stmt::Loop(loop_stmt) => emit_loop(loop_stmt, t),
        Stmt::Return(ret) => emit_return(ret, t),
        Stmt::Expr(expr_stmt) => t.line(format!("        {};", render_expr(&expr_stmt.expr))),
    }
}

fn emit_create(create: &CreateStmt, t: &mut Translator) {
    let class = &create.class_name.name;
    t.line(format!(
        "        {class} {} = new {class}({});",
        create.var.name,
        render_args(&create.args)
    ));
}

fn emit_assign(assign: &AssignStmt, t: &mut Translator) {
    let target = match &assign.target {
        AssignTarget::Variable(name) => name.name.clone(),
        AssignTarget::Member(member) => render_member(member),
    };
    t.line(format!("        {target} = {};", render_expr(&assign.value)));
}

fn emit_if(if_stmt: &IfStmt, t: &mut Translator) {
    t.line(format!(
        "        if ({}) {{",
        render_logical(&if_stmt.condition)
    ));
    emit_block(&if_stmt.then_block, t);
    t.line("        }".to_string());
    if let Some(else_block) = &if_stmt.else_block {
        t.line("        else {".to_string());
        emit_block(else_block, t);
        t.line("        }".to_string());
    }
}

/// The post-test loop renders as a do/test-and-exit construct: the guard is
/// the logical negation of the source condition, kept inside its own
/// parentheses so compound `||`/`&&` conditions negate as a whole.
fn emit_loop(loop_stmt: &LoopStmt, t: &mut Translator) {
    t.line("        do {".to_string());
    emit_block(&loop_stmt.body, t);
    t.line(format!(
        "        }} while (!({}));",
        render_logical(&loop_stmt.until)
    ));
}

fn emit_return(ret: &ReturnStmt, t: &mut Translator) {
    match &ret.value {
        Some(value) => t.line(format!("        return {};", render_expr(value))),
        None => t.line("        return;".to_string()),
    }
}
