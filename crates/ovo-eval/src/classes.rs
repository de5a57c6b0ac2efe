//! Class table and instance model.
//!
//! The class table is built once, before execution begins, by a single pass
//! over the program's class declarations. Definitions are immutable after
//! that pass. Method bodies are non-owning references into the externally
//! owned tree; the tree must outlive the table.

use crate::value::Value;
use ovo_types::ast::{ClassDecl, ClassMember, MethodDecl};
use ovo_types::Fault;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A registered class definition: name, optional superclass link, the
/// class's own declared attributes (ordered, default-unset), and its own
/// method set.
#[derive(Debug)]
pub struct ClassDef<'a> {
    pub name: String,
    /// Shared link; many subclasses may reference one superclass.
    pub superclass: Option<Rc<ClassDef<'a>>>,
    attributes: Vec<String>,
    methods: BTreeMap<String, &'a MethodDecl>,
}

impl<'a> ClassDef<'a> {
    /// Whether this class itself declares `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    /// Whether `name` is declared anywhere in the declaration chain
    /// (this class, then its ancestors).
    pub fn declares_in_chain(&self, name: &str) -> bool {
        if self.declares(name) {
            return true;
        }
        match &self.superclass {
            Some(parent) => parent.declares_in_chain(name),
            None => false,
        }
    }

    /// Method dispatch: the own method set, then exactly one level up
    /// (the immediate superclass's own set). No deeper chain search.
    pub fn find_method(&self, name: &str) -> Option<&'a MethodDecl> {
        self.methods.get(name).copied().or_else(|| {
            self.superclass
                .as_ref()
                .and_then(|parent| parent.methods.get(name).copied())
        })
    }

    /// All attribute names over the declaration chain, ancestors'
    /// declarations first. This is the positional order constructor
    /// arguments bind in.
    pub fn chain_attributes(&self) -> Vec<String> {
        let mut attrs = match &self.superclass {
            Some(parent) => parent.chain_attributes(),
            None => Vec::new(),
        };
        attrs.extend(self.attributes.iter().cloned());
        attrs
    }
}

/// Registry of class definitions, keyed by name.
#[derive(Debug, Default)]
pub struct ClassTable<'a> {
    classes: BTreeMap<String, Rc<ClassDef<'a>>>,
}

impl<'a> ClassTable<'a> {
    /// Build the table from the ordered class-declaration sequence.
    ///
    /// A superclass is resolved against classes already registered, so a
    /// class must be declared after its superclass; a forward or missing
    /// reference aborts construction. Re-declaring a class name silently
    /// replaces the earlier definition.
    pub fn build(decls: &'a [ClassDecl]) -> Result<Self, Fault> {
        let mut table = Self::default();
        for decl in decls {
            table.register(decl)?;
        }
        Ok(table)
    }

    fn register(&mut self, decl: &'a ClassDecl) -> Result<(), Fault> {
        let superclass = match &decl.superclass {
            Some(base) => Some(self.classes.get(&base.name).cloned().ok_or_else(|| {
                Fault::UnknownSuperclass {
                    class: decl.name.name.clone(),
                    superclass: base.name.clone(),
                }
            })?),
            None => None,
        };

        let mut attributes = Vec::new();
        let mut methods = BTreeMap::new();
        for member in &decl.members {
            match member {
                ClassMember::Attribute(attr) => {
                    if !attributes.contains(&attr.name.name) {
                        attributes.push(attr.name.name.clone());
                    }
                }
                ClassMember::Method(method) => {
                    methods.insert(method.name.name.clone(), method);
                }
                // Constructors carry no runtime meaning: create-statement
                // arguments bind positionally to declared attributes.
                ClassMember::Constructor(_) => {}
            }
        }

        self.classes.insert(
            decl.name.name.clone(),
            Rc::new(ClassDef {
                name: decl.name.name.clone(),
                superclass,
                attributes,
                methods,
            }),
        );
        Ok(())
    }

    /// Look up a class by name.
    pub fn get(&self, name: &str) -> Option<Rc<ClassDef<'a>>> {
        self.classes.get(name).cloned()
    }

    /// Number of distinct registered names.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// A runtime object: a shared class reference plus its own field store.
///
/// Fields are populated lazily, on first write or by constructor-argument
/// binding. The logical attribute set is the union over the superclass
/// chain; a declared-but-unset attribute reads as [`Value::Unset`].
#[derive(Debug)]
pub struct Instance<'a> {
    pub class: Rc<ClassDef<'a>>,
    fields: BTreeMap<String, Value<'a>>,
}

impl<'a> Instance<'a> {
    pub fn new(class: Rc<ClassDef<'a>>) -> Self {
        Self {
            class,
            fields: BTreeMap::new(),
        }
    }

    /// Attribute read: the own field store first; otherwise the unset
    /// sentinel if the name is declared anywhere in the chain; otherwise
    /// an unknown-attribute fault.
    pub fn get_attr(&self, name: &str) -> Result<Value<'a>, Fault> {
        if let Some(value) = self.fields.get(name) {
            return Ok(value.clone());
        }
        if self.class.declares_in_chain(name) {
            return Ok(Value::Unset);
        }
        Err(Fault::UnknownAttribute {
            class: self.class.name.clone(),
            attribute: name.to_string(),
        })
    }

    /// Attribute write. Permitted when the name is declared on the own
    /// class, or when the class has any superclass at all. The guard is
    /// intentionally loose and does not require the name to be declared
    /// anywhere in the chain.
    pub fn set_attr(&mut self, name: &str, value: Value<'a>) -> Result<(), Fault> {
        if self.class.declares(name) || self.class.superclass.is_some() {
            self.fields.insert(name.to_string(), value);
            Ok(())
        } else {
            Err(Fault::UnknownAttribute {
                class: self.class.name.clone(),
                attribute: name.to_string(),
            })
        }
    }
}
