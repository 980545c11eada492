//! # postfixa
//!
//! postfixa is a Reverse Polish Notation calculator written in Rust.
//! It tokenizes flat postfix expressions and evaluates them against a
//! persistent operand stack, with non-fatal diagnostics for stack underflow
//! and division by zero.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::Calculator;

/// Provides unified diagnostic types for evaluation.
///
/// This module defines all diagnostics that can be raised while evaluating a
/// token sequence. Every diagnostic is non-fatal: it is recorded, the operand
/// stack stays unmodified, and evaluation continues with the next token.
///
/// # Responsibilities
/// - Defines the diagnostic enum for all failure modes (underflow, division
///   by zero).
/// - Renders human-readable messages for the side channel.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of postfix expressions.
///
/// This module ties together the lexer, the operator set, the operand stack
/// and the evaluator to provide a complete calculator. It exposes the public
/// API for tokenizing and evaluating input lines.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, operators, stack, evaluator.
/// - Provides entry points for tokenizing and evaluating user input.
/// - Manages the persistent per-calculator stack state.
pub mod interpreter;
/// General utilities for rendering numeric results.
///
/// # Responsibilities
/// - Renders operand values the way the calculator reports them.
pub mod util;

/// Evaluates a single input line on a fresh calculator and returns the
/// rendered top-of-stack.
///
/// Each call creates a throwaway [`Calculator`], so no stack state survives
/// between calls and any diagnostics are discarded. Hold a `Calculator` and
/// call [`Calculator::evaluate_input`] on it to keep the stack, or to
/// inspect diagnostics.
///
/// # Examples
/// ```
/// use postfixa::evaluate_once;
///
/// assert_eq!(evaluate_once("3 4 +"), "7.0");
/// assert_eq!(evaluate_once("5 sqr"), "25.0");
///
/// // An empty stack renders the no-value indicator.
/// assert_eq!(evaluate_once("+"), "no value");
/// ```
#[must_use]
pub fn evaluate_once(source: &str) -> String {
    let mut calculator = Calculator::new();
    calculator.evaluate_input(source)
}
