use crate::{
    error::EvalError,
    interpreter::{
        lexer::{Token, tokenize},
        operator::Operator,
        stack::OperandStack,
    },
    util::num::format_value,
};

/// Result type used by the evaluator.
///
/// Operator applications return either `T` or an [`EvalError`] describing the
/// failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Rendered when an evaluation finishes with nothing on the stack.
pub const NO_VALUE: &str = "no value";

/// Stores the calculator state.
///
/// One `Calculator` owns one operand stack. The stack persists across
/// [`evaluate_input`](Self::evaluate_input) calls, so the result of one line
/// can serve as an operand for a later line; this is deliberate REPL-style
/// memory. Separate instances share nothing.
///
/// The calculator also records the diagnostics raised by the most recent
/// evaluation call, so callers can render them on a side channel without the
/// result value carrying them.
pub struct Calculator {
    stack:       OperandStack,
    diagnostics: Vec<EvalError>,
}

#[allow(clippy::new_without_default)]
impl Calculator {
    /// Creates a new calculator with an empty operand stack.
    #[must_use]
    pub fn new() -> Self {
        Self { stack:       OperandStack::new(),
               diagnostics: Vec::new(), }
    }
    /// Evaluates one line of raw input and returns the rendered result.
    ///
    /// This is the combined entry point: the line is tokenized and the token
    /// sequence is evaluated against the persistent stack.
    ///
    /// # Example
    /// ```
    /// use postfixa::interpreter::evaluator::Calculator;
    ///
    /// let mut calculator = Calculator::new();
    ///
    /// assert_eq!(calculator.evaluate_input("3 4 +"), "7.0");
    /// // The stack persists, so the previous result is still an operand.
    /// assert_eq!(calculator.evaluate_input("2 *"), "14.0");
    /// ```
    pub fn evaluate_input(&mut self, input: &str) -> String {
        let tokens = tokenize(input);
        self.evaluate_tokens(&tokens)
    }
    /// Evaluates an already tokenized sequence against the persistent stack.
    ///
    /// Tokens are processed in order: numbers are pushed, operator symbols
    /// are resolved and applied, and invalid tokens are skipped without any
    /// stack effect. A failed operator application records a diagnostic,
    /// leaves the stack as it was and evaluation continues with the next
    /// token; no failure propagates out of this call.
    ///
    /// Returns the rendering of the top of the stack without popping it, or
    /// [`NO_VALUE`] if the stack is empty. Diagnostics recorded by a previous
    /// call are cleared first.
    pub fn evaluate_tokens(&mut self, tokens: &[Token]) -> String {
        self.diagnostics.clear();

        for token in tokens {
            match token {
                Token::Number(value) => self.stack.push(*value),
                Token::Operator(symbol) => {
                    if let Err(e) = Operator::resolve(symbol).apply(&mut self.stack) {
                        self.diagnostics.push(e);
                    }
                },
                Token::Invalid(_) | Token::Ignored => {},
            }
        }

        self.stack.peek().map_or_else(|| NO_VALUE.to_string(), format_value)
    }
    /// Returns the diagnostics recorded by the most recent evaluation call.
    #[must_use]
    pub fn diagnostics(&self) -> &[EvalError] {
        &self.diagnostics
    }
    /// Returns the operand stack.
    #[must_use]
    pub const fn stack(&self) -> &OperandStack {
        &self.stack
    }
    /// Clears the operand stack, starting a fresh session.
    pub fn reset(&mut self) {
        self.stack.clear();
    }
}
