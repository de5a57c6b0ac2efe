//! The interpreter backend: statement execution and expression evaluation.
//!
//! The current-instance context (what `self` resolves to) is threaded as an
//! explicit parameter through every execution/evaluation call rather than
//! held in a mutable field: a method call passes the callee instance down
//! for the duration of the body, and the caller's own context is untouched
//! when the call returns, including under nested and re-entrant calls.

use crate::classes::{ClassTable, Instance};
use crate::env::Environment;
use crate::value::Value;
use ovo_types::ast::*;
use ovo_types::Fault;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

/// The current-instance context: the instance `self` resolves to inside an
/// active method body, or `None` at top level.
type Ctx<'c, 'a> = Option<&'c Rc<RefCell<Instance<'a>>>>;

/// Executes a program against a class table, a flat variable environment,
/// and an output line buffer.
pub struct Interpreter<'a> {
    classes: ClassTable<'a>,
    pub env: Environment<'a>,
    /// One canonical line per executed print statement, in program order.
    /// Lines emitted before a fault are preserved.
    pub output: Vec<String>,
}

impl<'a> Interpreter<'a> {
    pub fn new() -> Self {
        Self {
            classes: ClassTable::default(),
            env: Environment::new(),
            output: Vec::new(),
        }
    }

    /// Run a whole program: the one-time class-declaration pass, then the
    /// main block. Fatal on the first fault.
    pub fn run(&mut self, program: &'a Program) -> Result<(), Fault> {
        self.classes = ClassTable::build(&program.classes)?;
        self.exec_block(&program.main.body, None)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statement execution
    // ══════════════════════════════════════════════════════════════════════

    fn exec_block(&mut self, block: &'a Block, ctx: Ctx<'_, 'a>) -> Result<(), Fault> {
        for stmt in &block.stmts {
            self.exec_stmt(stmt, ctx)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &'a Stmt, ctx: Ctx<'_, 'a>) -> Result<(), Fault> {
        match stmt {
            Stmt::Create(create) => self.exec_create(create, ctx),
            Stmt::Assign(assign) => self.exec_assign(assign, ctx),
            Stmt::Print(print) => {
                let value = self.eval_expr(&print.value, ctx)?;
                self.output.push(value.render());
                Ok(())
            }
            Stmt::If(if_stmt) => self.exec_if(if_stmt, ctx),
            Stmt::Loop(loop_stmt) => self.exec_loop(loop_stmt, ctx),
            // `return` does not unwind: the remaining statements of the
            // enclosing block still execute, and the operand is not
            // evaluated.
            Stmt::Return(_) => Ok(()),
            Stmt::Expr(expr_stmt) => {
                self.eval_expr(&expr_stmt.expr, ctx)?;
                Ok(())
            }
        }
    }

    fn exec_create(&mut self, create: &'a CreateStmt, ctx: Ctx<'_, 'a>) -> Result<(), Fault> {
        let class = self
            .classes
            .get(&create.class_name.name)
            .ok_or_else(|| Fault::UnknownClass {
                name: create.class_name.name.clone(),
            })?;

        // All arguments are evaluated left to right before binding, so
        // their side effects happen even for arguments that get dropped.
        let mut args = Vec::with_capacity(create.args.len());
        for arg in &create.args {
            args.push(self.eval_expr(arg, ctx)?);
        }

        let attr_names = class.chain_attributes();
        let instance = Rc::new(RefCell::new(Instance::new(class)));
        // Positional binding against the chain-ordered attribute list;
        // binding stops at the shorter of the two sequences.
        for (name, value) in attr_names.iter().zip(args) {
            instance.borrow_mut().set_attr(name, value)?;
        }

        self.env.set(&create.var.name, Value::Object(instance));
        Ok(())
    }

    fn exec_assign(&mut self, assign: &'a AssignStmt, ctx: Ctx<'_, 'a>) -> Result<(), Fault> {
        let value = self.eval_expr(&assign.value, ctx)?;
        match &assign.target {
            AssignTarget::Variable(name) => {
                self.env.set(&name.name, value);
                Ok(())
            }
            AssignTarget::Member(member) => {
                let object = self.resolve_receiver(&member.receiver, ctx)?;
                let result = object.borrow_mut().set_attr(&member.attribute.name, value);
                result
            }
        }
    }

    fn exec_if(&mut self, if_stmt: &'a IfStmt, ctx: Ctx<'_, 'a>) -> Result<(), Fault> {
        if self.eval_logical(&if_stmt.condition, ctx)? {
            self.exec_block(&if_stmt.then_block, ctx)
        } else if let Some(else_block) = &if_stmt.else_block {
            self.exec_block(else_block, ctx)
        } else {
            Ok(())
        }
    }

    /// Post-test loop: the body runs once unconditionally, then repeats
    /// while the condition is false. A condition that never becomes true
    /// loops forever; no bound is imposed.
    fn exec_loop(&mut self, loop_stmt: &'a LoopStmt, ctx: Ctx<'_, 'a>) -> Result<(), Fault> {
        loop {
            self.exec_block(&loop_stmt.body, ctx)?;
            if self.eval_logical(&loop_stmt.until, ctx)? {
                return Ok(());
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    fn eval_expr(&mut self, expr: &'a Expr, ctx: Ctx<'_, 'a>) -> Result<Value<'a>, Fault> {
        match &expr.kind {
            ExprKind::IntLit(n) => Ok(Value::Int(*n)),
            ExprKind::FloatLit(f) => Ok(Value::Float(*f)),
            ExprKind::BoolLit(b) => Ok(Value::Bool(*b)),
            ExprKind::CharLit(c) => Ok(Value::Char(*c)),
            ExprKind::StringLit(s) => Ok(Value::Str(s.clone())),
            ExprKind::Variable(name) => {
                self.env
                    .get(name)
                    .cloned()
                    .ok_or_else(|| Fault::UnknownVariable { name: name.clone() })
            }
            ExprKind::Member(member) => {
                let object = self.resolve_receiver(&member.receiver, ctx)?;
                let result = object.borrow().get_attr(&member.attribute.name);
                result
            }
            ExprKind::Call(call) => self.eval_call(call, ctx),
            ExprKind::Binary { left, op, right } => {
                let lv = self.eval_expr(left, ctx)?;
                let rv = self.eval_expr(right, ctx)?;
                eval_binary(&lv, *op, &rv)
            }
            ExprKind::Paren(inner) => self.eval_expr(inner, ctx),
        }
    }

    /// Dispatch a method call: resolve the receiver variable, find the
    /// method on the object's class (one superclass level at most), and
    /// execute the body with the receiver as the current instance.
    fn eval_call(&mut self, call: &'a MethodCall, ctx: Ctx<'_, 'a>) -> Result<Value<'a>, Fault> {
        let object = self.lookup_object(&call.object.name)?;
        let method = {
            let instance = object.borrow();
            instance
                .class
                .find_method(&call.method.name)
                .ok_or_else(|| Fault::UnknownMethod {
                    class: instance.class.name.clone(),
                    method: call.method.name.clone(),
                })?
        };

        // Arguments are evaluated for their effects and then dropped: the
        // flat environment has no frames to bind parameters into.
        for arg in &call.args {
            self.eval_expr(arg, ctx)?;
        }

        self.exec_block(&method.body, Some(&object))?;
        // Methods do not produce a value.
        Ok(Value::Unset)
    }

    fn resolve_receiver(
        &self,
        receiver: &Receiver,
        ctx: Ctx<'_, 'a>,
    ) -> Result<Rc<RefCell<Instance<'a>>>, Fault> {
        match receiver {
            Receiver::SelfRef(_) => ctx.cloned().ok_or(Fault::SelfOutsideMethod),
            Receiver::Variable(name) => self.lookup_object(&name.name),
        }
    }

    fn lookup_object(&self, name: &str) -> Result<Rc<RefCell<Instance<'a>>>, Fault> {
        match self.env.get(name) {
            Some(Value::Object(object)) => Ok(object.clone()),
            Some(other) => Err(Fault::NotAnObject {
                name: name.to_string(),
                kind: other.type_name(),
            }),
            None => Err(Fault::UnknownVariable {
                name: name.to_string(),
            }),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Logical evaluation
    // ══════════════════════════════════════════════════════════════════════

    /// Disjunction of terms, left to right: stops at the first true term.
    /// Short-circuiting is observable: factors may contain method calls
    /// with side effects.
    fn eval_logical(&mut self, cond: &'a LogicalExpr, ctx: Ctx<'_, 'a>) -> Result<bool, Fault> {
        for term in &cond.terms {
            if self.eval_term(term, ctx)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Conjunction of factors, left to right: stops at the first false one.
    fn eval_term(&mut self, term: &'a LogicalTerm, ctx: Ctx<'_, 'a>) -> Result<bool, Fault> {
        for factor in &term.factors {
            if !self.eval_factor(factor, ctx)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn eval_factor(&mut self, factor: &'a LogicalFactor, ctx: Ctx<'_, 'a>) -> Result<bool, Fault> {
        match factor {
            LogicalFactor::Comparison(cmp) => {
                let lv = self.eval_expr(&cmp.left, ctx)?;
                let rv = self.eval_expr(&cmp.right, ctx)?;
                eval_comparison(&lv, cmp.op, &rv)
            }
            LogicalFactor::Nested(inner) => self.eval_logical(inner, ctx),
            LogicalFactor::Value(expr) => Ok(self.eval_expr(expr, ctx)?.is_truthy()),
        }
    }
}

impl<'a> Default for Interpreter<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a program and return its printed lines.
///
/// Convenience wrapper: on a fault the lines emitted before it are not
/// returned; hold an [`Interpreter`] directly to keep them.
pub fn interpret(program: &Program) -> Result<Vec<String>, Fault> {
    let mut interpreter = Interpreter::new();
    interpreter.run(program)?;
    Ok(interpreter.output)
}

// ══════════════════════════════════════════════════════════════════════════════
// Arithmetic & comparison kernels
// ══════════════════════════════════════════════════════════════════════════════

/// Binary arithmetic. `+` concatenates the canonical textual forms when
/// either operand is a string; every other combination is numeric.
fn eval_binary<'a>(lv: &Value<'a>, op: ArithOp, rv: &Value<'a>) -> Result<Value<'a>, Fault> {
    if op == ArithOp::Add && (matches!(lv, Value::Str(_)) || matches!(rv, Value::Str(_))) {
        return Ok(Value::Str(format!("{}{}", lv.render(), rv.render())));
    }
    match (lv, rv) {
        (Value::Int(a), Value::Int(b)) => int_arith(*a, op, *b),
        (Value::Int(a), Value::Float(b)) => float_arith(*a as f64, op, *b),
        (Value::Float(a), Value::Int(b)) => float_arith(*a, op, *b as f64),
        (Value::Float(a), Value::Float(b)) => float_arith(*a, op, *b),
        _ => Err(Fault::IncompatibleOperands {
            op: op.as_str(),
            left: lv.type_name(),
            right: rv.type_name(),
        }),
    }
}

fn int_arith<'a>(a: i64, op: ArithOp, b: i64) -> Result<Value<'a>, Fault> {
    let result = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
        ArithOp::Mul => a.checked_mul(b),
        ArithOp::Div => {
            if b == 0 {
                return Err(Fault::DivisionByZero);
            }
            // True division: dividing two ints yields a float.
            return Ok(Value::Float(a as f64 / b as f64));
        }
        ArithOp::Mod => {
            if b == 0 {
                return Err(Fault::DivisionByZero);
            }
            a.checked_rem(b)
        }
    };
    result.map(Value::Int).ok_or(Fault::Overflow { op: op.as_str() })
}

fn float_arith<'a>(a: f64, op: ArithOp, b: f64) -> Result<Value<'a>, Fault> {
    match op {
        ArithOp::Add => Ok(Value::Float(a + b)),
        ArithOp::Sub => Ok(Value::Float(a - b)),
        ArithOp::Mul => Ok(Value::Float(a * b)),
        ArithOp::Div if b == 0.0 => Err(Fault::DivisionByZero),
        ArithOp::Div => Ok(Value::Float(a / b)),
        ArithOp::Mod if b == 0.0 => Err(Fault::DivisionByZero),
        ArithOp::Mod => Ok(Value::Float(a % b)),
    }
}

/// Natural equality/ordering of two values: mixed numeric kinds compare by
/// promotion, strings lexicographically, chars by code point, booleans with
/// `false < true`, objects by reference identity (equality only), the unset
/// sentinel only against itself. Any other pairing is a fault.
fn eval_comparison<'a>(lv: &Value<'a>, op: CmpOp, rv: &Value<'a>) -> Result<bool, Fault> {
    let ordering = match (lv, rv) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Object(a), Value::Object(b)) => match op {
            CmpOp::Eq => return Ok(Rc::ptr_eq(a, b)),
            CmpOp::NotEq => return Ok(!Rc::ptr_eq(a, b)),
            _ => None,
        },
        (Value::Unset, Value::Unset) => Some(Ordering::Equal),
        _ => None,
    };
    let Some(ordering) = ordering else {
        return Err(Fault::IncompatibleComparison {
            op: op.as_str(),
            left: lv.type_name(),
            right: rv.type_name(),
        });
    };
    Ok(match op {
        CmpOp::Eq => ordering == Ordering::Equal,
        CmpOp::NotEq => ordering != Ordering::Equal,
        CmpOp::Less => ordering == Ordering::Less,
        CmpOp::Greater => ordering == Ordering::Greater,
        CmpOp::LessEq => ordering != Ordering::Greater,
        CmpOp::GreaterEq => ordering != Ordering::Less,
    })
}
