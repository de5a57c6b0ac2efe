//! The shared fault type for both Ovo backends.
//!
//! Every fault is fatal: the current run or translation stops at the first
//! occurrence, with no retry and no partial recovery. Output already emitted
//! before the fault is not retracted.

use serde::Serialize;
use thiserror::Error;

/// Fault category.
///
/// Resolution faults can arise during class-table construction or tree
/// traversal; evaluation faults only arise in the interpreter. The
/// transpiler never evaluates, so it can never raise an evaluation fault;
/// it may instead emit Java that fails under javac's own rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultCategory {
    Resolution,
    Evaluation,
}

/// A fatal fault raised by the interpreter or the class-table pass.
///
/// Each variant carries the offending name and, where one exists, the
/// containing class or object, so hosts can render diagnostics without
/// parsing message strings.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum Fault {
    #[error("unknown class '{name}'")]
    UnknownClass { name: String },

    #[error("unknown superclass '{superclass}' for class '{class}'")]
    UnknownSuperclass { class: String, superclass: String },

    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },

    #[error("class '{class}' has no attribute '{attribute}'")]
    UnknownAttribute { class: String, attribute: String },

    #[error("class '{class}' has no method '{method}()'")]
    UnknownMethod { class: String, method: String },

    #[error("'self' used outside of a method body")]
    SelfOutsideMethod,

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in '{op}'")]
    Overflow { op: &'static str },

    #[error("cannot apply '{op}' to {left} and {right}")]
    IncompatibleOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("cannot compare {left} and {right} with '{op}'")]
    IncompatibleComparison {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("'{name}' is not an object (found {kind})")]
    NotAnObject { name: String, kind: &'static str },
}

impl Fault {
    /// Get the category for this fault.
    pub fn category(&self) -> FaultCategory {
        match self {
            Fault::UnknownClass { .. }
            | Fault::UnknownSuperclass { .. }
            | Fault::UnknownVariable { .. }
            | Fault::UnknownAttribute { .. }
            | Fault::UnknownMethod { .. }
            | Fault::SelfOutsideMethod => FaultCategory::Resolution,
            Fault::DivisionByZero
            | Fault::Overflow { .. }
            | Fault::IncompatibleOperands { .. }
            | Fault::IncompatibleComparison { .. }
            | Fault::NotAnObject { .. } => FaultCategory::Evaluation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_display_carries_names() {
        let f = Fault::UnknownAttribute {
            class: "Dog".into(),
            attribute: "color".into(),
        };
        assert_eq!(format!("{f}"), "class 'Dog' has no attribute 'color'");

        let f = Fault::UnknownSuperclass {
            class: "Dog".into(),
            superclass: "Animal".into(),
        };
        assert_eq!(
            format!("{f}"),
            "unknown superclass 'Animal' for class 'Dog'"
        );
    }

    #[test]
    fn fault_categories() {
        let resolution = [
            Fault::UnknownClass { name: "X".into() },
            Fault::UnknownVariable { name: "x".into() },
            Fault::UnknownMethod {
                class: "X".into(),
                method: "m".into(),
            },
            Fault::SelfOutsideMethod,
        ];
        for f in resolution {
            assert_eq!(f.category(), FaultCategory::Resolution, "{f}");
        }

        let evaluation = [
            Fault::DivisionByZero,
            Fault::Overflow { op: "+" },
            Fault::IncompatibleOperands {
                op: "-",
                left: "string",
                right: "int",
            },
        ];
        for f in evaluation {
            assert_eq!(f.category(), FaultCategory::Evaluation, "{f}");
        }
    }

    #[test]
    fn fault_json_serialization() {
        let f = Fault::UnknownMethod {
            class: "Dog".into(),
            method: "speak".into(),
        };
        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains("UnknownMethod"));
        assert!(json.contains("\"class\":\"Dog\""));
        assert!(json.contains("\"method\":\"speak\""));

        let unit = serde_json::to_string(&Fault::SelfOutsideMethod).unwrap();
        assert!(unit.contains("SelfOutsideMethod"));
    }
}
