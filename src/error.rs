/// Evaluation diagnostics.
///
/// Defines all diagnostics that can be raised while applying operators to the
/// operand stack. Diagnostics are non-fatal by design: they are recorded,
/// the stack is left unmodified, and evaluation continues with the next
/// token.
pub mod eval_error;

pub use eval_error::EvalError;
