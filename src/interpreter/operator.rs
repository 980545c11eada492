use crate::{
    error::EvalError,
    interpreter::{evaluator::EvalResult, stack::OperandStack},
};

/// The closed set of operations a calculator can apply to its operand stack.
///
/// Operators are resolved from their textual symbol with [`Operator::resolve`]
/// and applied with [`Operator::apply`]. The set is fixed; there is no
/// runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`: pops two operands, pushes their sum.
    Add,
    /// `-`: pops two operands, pushes their difference.
    Sub,
    /// `*`: pops two operands, pushes their product.
    Mul,
    /// `/`: pops two operands, pushes their quotient. A divisor of exactly
    /// `0.0` is rejected before anything is popped.
    Div,
    /// `sqr`: pops one operand, pushes its square.
    Sqr,
    /// Any unrecognized symbol: leaves the stack untouched.
    Nop,
}

impl Operator {
    /// Resolves an operator symbol to its behavior.
    ///
    /// This is a total function: every unrecognized symbol resolves to
    /// [`Operator::Nop`] rather than an error, so a malformed operator token
    /// passes through evaluation without altering the stack or raising a
    /// diagnostic.
    ///
    /// # Example
    /// ```
    /// use postfixa::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::resolve("*"), Operator::Mul);
    /// assert_eq!(Operator::resolve("sqr"), Operator::Sqr);
    /// assert_eq!(Operator::resolve("%"), Operator::Nop);
    /// ```
    #[must_use]
    pub fn resolve(symbol: &str) -> Self {
        match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "sqr" => Self::Sqr,
            _ => Self::Nop,
        }
    }
    /// Returns how many operands the operator consumes from the stack.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => 2,
            Self::Sqr => 1,
            Self::Nop => 0,
        }
    }
    /// Applies the operator to the stack.
    ///
    /// Binary operators pop the right operand first (it was pushed last),
    /// then the left operand, and push the result. A failed application
    /// leaves the stack exactly as it was: no operand is consumed without a
    /// result being pushed.
    ///
    /// # Errors
    /// - [`EvalError::StackUnderflow`]: The stack holds fewer operands than
    ///   the operator consumes.
    /// - [`EvalError::DivisionByZero`]: The divisor on top of the stack is
    ///   exactly `0.0`.
    #[allow(clippy::float_cmp)]
    pub fn apply(self, stack: &mut OperandStack) -> EvalResult<()> {
        match self {
            Self::Add => {
                let (left, right) = self.take_pair(stack)?;
                stack.push(left + right);
                Ok(())
            },
            Self::Sub => {
                let (left, right) = self.take_pair(stack)?;
                stack.push(left - right);
                Ok(())
            },
            Self::Mul => {
                let (left, right) = self.take_pair(stack)?;
                stack.push(left * right);
                Ok(())
            },
            Self::Div => {
                if stack.len() < 2 {
                    return Err(self.underflow(stack.len()));
                }
                if let Some(divisor) = stack.peek()
                   && divisor == 0.0
                {
                    return Err(EvalError::DivisionByZero);
                }

                let (left, right) = self.take_pair(stack)?;
                stack.push(left / right);
                Ok(())
            },
            Self::Sqr => {
                let Some(operand) = stack.pop() else {
                    return Err(self.underflow(0));
                };
                stack.push(operand * operand);
                Ok(())
            },
            Self::Nop => Ok(()),
        }
    }
    /// Pops both operands of a binary operator, or reports an underflow
    /// without touching the stack.
    fn take_pair(self, stack: &mut OperandStack) -> EvalResult<(f64, f64)> {
        let found = stack.len();
        stack.pop_pair().ok_or(self.underflow(found))
    }

    const fn underflow(self, found: usize) -> EvalError {
        EvalError::StackUnderflow { operator: self,
                                    needed:   self.arity(),
                                    found }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Sqr => "sqr",
            Self::Nop => "nop",
        };

        write!(f, "{symbol}")
    }
}
