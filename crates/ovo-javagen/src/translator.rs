//! The transpiler backend: class, constructor, and main-block translation.
//!
//! Walks the same tree the interpreter executes, accumulating Java source
//! lines instead of evaluating. The only cross-class state is constructor
//! bookkeeping: each class's own parameter-name list is recorded as the
//! class is translated, and a subclass forwards a prefix of its parameters
//! (as long as the superclass's recorded list) to a synthesized
//! `super(...)` call. Classes are translated in declaration order, and a
//! class must be declared after its superclass, so the superclass's count
//! is always recorded first.

use crate::stmt::emit_block;
use crate::types::java_type;
use ovo_types::ast::*;
use std::collections::BTreeMap;

/// Translate a program into one line-oriented Java source text.
pub fn translate(program: &Program) -> String {
    Translator::new().translate(program)
}

/// Accumulates output lines and per-class constructor bookkeeping.
pub struct Translator {
    lines: Vec<String>,
    /// Class name → its own constructor parameter names.
    ctor_params: BTreeMap<String, Vec<String>>,
    /// Subclass name → superclass name.
    parents: BTreeMap<String, String>,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            ctor_params: BTreeMap::new(),
            parents: BTreeMap::new(),
        }
    }

    /// Translate a whole program. Consumes the translator; the result is
    /// the single accumulated text buffer.
    pub fn translate(mut self, program: &Program) -> String {
        for class in &program.classes {
            self.emit_class(class);
        }
        self.emit_main(&program.main);
        self.lines.join("\n")
    }

    /// Append one output line.
    pub fn line(&mut self, line: String) {
        self.lines.push(line);
    }

    // ══════════════════════════════════════════════════════════════════════
    // Class translation
    // ══════════════════════════════════════════════════════════════════════

    fn emit_class(&mut self, class: &ClassDecl) {
        let name = &class.name.name;
        match &class.superclass {
            Some(base) => {
                self.parents.insert(name.clone(), base.name.clone());
                self.line(format!("class {name} extends {} {{", base.name));
            }
            None => self.line(format!("class {name} {{")),
        }
        for member in &class.members {
            match member {
                ClassMember::Attribute(attr) => self.emit_attribute(attr),
                ClassMember::Constructor(ctor) => self.emit_constructor(name, ctor),
                ClassMember::Method(method) => self.emit_method(method),
            }
        }
        self.line("}".to_string());
    }

    fn emit_attribute(&mut self, attr: &AttributeDecl) {
        self.line(format!(
            "    public {} {};",
            java_type(&attr.type_name.name),
            attr.name.name
        ));
    }

    fn emit_method(&mut self, method: &MethodDecl) {
        self.line(format!(
            "    public void {}({}) {{",
            method.name.name,
            render_params(&method.params)
        ));
        emit_block(&method.body, self);
        self.line("    }".to_string());
    }

    /// Record the class's own parameter list, then emit the constructor.
    ///
    /// When the class inherits, the prefix of the parameter list, of
    /// length equal to the previously recorded parameter count of the
    /// superclass, is forwarded to `super(...)`; only the suffix is
    /// assigned to the class's own fields.
    fn emit_constructor(&mut self, class_name: &str, ctor: &ConstructorDecl) {
        let param_names: Vec<String> = ctor
            .params
            .iter()
            .map(|p| p.name.name.clone())
            .collect();
        self.ctor_params
            .insert(class_name.to_string(), param_names.clone());

        self.line(format!(
            "    public {class_name}({}) {{",
            render_params(&ctor.params)
        ));

        match self.parents.get(class_name).cloned() {
            Some(base) => {
                let forwarded = self
                    .ctor_params
                    .get(&base)
                    .map(|params| params.len())
                    .unwrap_or(0)
                    .min(param_names.len());
                self.line(format!("        super({});", param_names[..forwarded].join(", ")));
                for name in &param_names[forwarded..] {
                    self.line(format!("        this.{name} = {name};"));
                }
            }
            None => {
                for name in &param_names {
                    self.line(format!("        this.{name} = {name};"));
                }
            }
        }
        self.line("    }".to_string());
    }

    // ══════════════════════════════════════════════════════════════════════
    // Entry class
    // ══════════════════════════════════════════════════════════════════════

    fn emit_main(&mut self, main: &MainDecl) {
        self.line("public class Main {".to_string());
        self.line("    public static void main(String[] args) {".to_string());
        emit_block(&main.body, self);
        self.line("    }".to_string());
        self.line("}".to_string());
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

fn render_params(params: &[TypedParam]) -> String {
    params
        .iter()
        .map(|p| format!("{} {}", java_type(&p.type_name.name), p.name.name))
        .collect::<Vec<_>>()
        .join(", ")
}
