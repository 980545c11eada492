use crate::interpreter::operator::Operator;

#[derive(Debug, Clone, PartialEq)]
/// Represents all diagnostics that can be raised while applying operators.
///
/// None of these are fatal: evaluation records the diagnostic, leaves the
/// operand stack untouched and continues with the next token.
pub enum EvalError {
    /// An operator found fewer operands on the stack than it consumes.
    StackUnderflow {
        /// The operator that was being applied.
        operator: Operator,
        /// How many operands the operator consumes.
        needed:   usize,
        /// How many operands were actually available.
        found:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { operator,
                                   needed,
                                   found, } => {
                write!(f,
                       "Stack error: operator '{operator}' expected {needed} operands, found {found}.")
            },

            Self::DivisionByZero => write!(f, "Division by zero error."),
        }
    }
}

impl std::error::Error for EvalError {}
