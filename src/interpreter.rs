/// The lexer module tokenizes calculator input.
///
/// The lexer (tokenizer) reads one line of raw text and produces an ordered
/// sequence of tokens: numeric literals, operator symbols and preserved
/// invalid runs. This is the first stage of evaluation and has no dependency
/// on the evaluator.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens, longest match
///   first.
/// - Handles signed numeric literals and the fixed operator symbols.
/// - Preserves unrecognized runs as data instead of dropping them.
pub mod lexer;
/// The operator module defines the closed set of stack operations.
///
/// Each operator is a pure function from stack state to stack state or a
/// failure signal, identified by its textual symbol. Resolution from symbol
/// to behavior is total: unknown symbols degrade to a no-op.
///
/// # Responsibilities
/// - Resolves operator symbols to behaviors.
/// - Applies operators to the operand stack with an explicit failure policy.
/// - Guarantees a failed application leaves the stack untouched.
pub mod operator;
/// The evaluator module interprets token sequences against the stack.
///
/// The evaluator walks the token sequence produced by the lexer, pushes
/// numbers, dispatches operator symbols and skips invalid tokens. It owns the
/// persistent calculator state and renders the final result.
///
/// # Responsibilities
/// - Maintains the operand stack across evaluation calls.
/// - Records non-fatal diagnostics and continues after local failures.
/// - Renders the top of the stack as the textual result of a call.
pub mod evaluator;
/// The stack module provides last-in-first-out operand storage.
///
/// # Responsibilities
/// - Stores intermediate and final numeric values.
/// - Offers all-or-nothing operand consumption for binary operators.
pub mod stack;
