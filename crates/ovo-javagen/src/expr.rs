//! Expression and condition rendering to Java source text.
//!
//! Pure re-rendering, no evaluation: every function here maps a node to a
//! `String` fragment.

use ovo_types::ast::*;

/// Render a value expression.
pub fn render_expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::IntLit(n) => n.to_string(),
        ExprKind::FloatLit(f) => {
            // Whole floats keep a fractional digit so Java still reads
            // them as floating-point literals.
            if f.is_finite() && f.fract() == 0.0 {
                format!("{f:.1}")
            } else {
                f.to_string()
            }
        }
        ExprKind::BoolLit(b) => if *b { "true" } else { "false" }.to_string(),
        ExprKind::CharLit(c) => match c {
            '\'' => "'\\''".to_string(),
            '\\' => "'\\\\'".to_string(),
            c => format!("'{c}'"),
        },
        ExprKind::StringLit(s) => {
            format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
        }
        ExprKind::Variable(name) => name.clone(),
        ExprKind::Member(member) => render_member(member),
        ExprKind::Call(call) => render_call(call),
        ExprKind::Binary { left, op, right } => format!(
            "({} {} {})",
            render_expr(left),
            op.as_str(),
            render_expr(right)
        ),
        ExprKind::Paren(inner) => format!("({})", render_expr(inner)),
    }
}

/// `self` lowers to Java's own-instance qualifier; any other base renders
/// as ordinary field-access dot syntax.
pub fn render_member(member: &MemberAccess) -> String {
    match &member.receiver {
        Receiver::SelfRef(_) => format!("this.{}", member.attribute.name),
        Receiver::Variable(name) => format!("{}.{}", name.name, member.attribute.name),
    }
}

pub fn render_call(call: &MethodCall) -> String {
    format!(
        "{}.{}({})",
        call.object.name,
        call.method.name,
        render_args(&call.args)
    )
}

/// Comma-joined argument list.
pub fn render_args(args: &[Expr]) -> String {
    args.iter().map(render_expr).collect::<Vec<_>>().join(", ")
}

/// Render a condition: `||`-joined terms of `&&`-joined factors.
pub fn render_logical(cond: &LogicalExpr) -> String {
    cond.terms
        .iter()
        .map(render_term)
        .collect::<Vec<_>>()
        .join(" || ")
}

fn render_term(term: &LogicalTerm) -> String {
    term.factors
        .iter()
        .map(render_factor)
        .collect::<Vec<_>>()
        .join(" && ")
}

fn render_factor(factor: &LogicalFactor) -> String {
    match factor {
        LogicalFactor::Comparison(cmp) => format!(
            "{} {} {}",
            render_expr(&cmp.left),
            cmp.op.as_str(),
            render_expr(&cmp.right)
        ),
        LogicalFactor::Nested(inner) => format!("({})", render_logical(inner)),
        LogicalFactor::Value(expr) => render_expr(expr),
    }
}
