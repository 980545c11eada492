use std::fs;

use postfixa::{
    error::EvalError,
    interpreter::{
        evaluator::Calculator,
        lexer::{Token, tokenize},
        operator::Operator,
        stack::OperandStack,
    },
};
use walkdir::WalkDir;

fn assert_result(input: &str, expected: &str) {
    let mut calculator = Calculator::new();
    let result = calculator.evaluate_input(input);

    assert_eq!(result, expected, "input: {input}");
    assert!(calculator.diagnostics().is_empty(),
            "input {input:?} raised unexpected diagnostics: {:?}",
            calculator.diagnostics());
}

#[test]
fn basic_arithmetic() {
    assert_result("3 4 +", "7.0");
    assert_result("8 5 -", "3.0");
    assert_result("7 9 *", "63.0");
    assert_result("10 2 /", "5.0");
    assert_result("7 2 /", "3.5");
}

#[test]
fn unary_square() {
    assert_result("5 sqr", "25.0");
    assert_result("-3 sqr", "9.0");
    assert_result("2.5 sqr", "6.25");
    assert_result("2 sqr sqr", "16.0");
}

#[test]
fn chained_expressions() {
    assert_result("3 4 + 2 *", "14.0");
    assert_result("5 1 2 + 4 * + 3 -", "14.0");
}

#[test]
fn empty_input_has_no_value() {
    assert_result("", "no value");
    assert_result("   ", "no value");
}

#[test]
fn minus_glued_to_digits_is_a_sign() {
    assert_result("3 -4 +", "-1.0");

    assert_eq!(tokenize("3 -4"),
               vec![Token::Number(3.0), Token::Number(-4.0)]);
    // Longest match wins even without a separating space.
    assert_eq!(tokenize("3-4"),
               vec![Token::Number(3.0), Token::Number(-4.0)]);
}

#[test]
fn bare_minus_is_subtraction() {
    assert_result("10 3 -", "7.0");

    assert_eq!(tokenize("3 - 4"),
               vec![Token::Number(3.0),
                    Token::Operator("-".to_string()),
                    Token::Number(4.0)]);
    // Only one minus can be a sign; the first one falls back to the
    // subtraction operator.
    assert_eq!(tokenize("--4"),
               vec![Token::Operator("-".to_string()), Token::Number(-4.0)]);
}

#[test]
fn tokenizer_classifies_numbers_operators_and_garbage() {
    assert_eq!(tokenize("3 -4 @ sqr +"),
               vec![Token::Number(3.0),
                    Token::Number(-4.0),
                    Token::Invalid("@".to_string()),
                    Token::Operator("sqr".to_string()),
                    Token::Operator("+".to_string())]);
}

#[test]
fn garbage_runs_are_maximal() {
    assert_eq!(tokenize("sqrt"), vec![Token::Invalid("sqrt".to_string())]);
    assert_eq!(tokenize("1 @#?! 2"),
               vec![Token::Number(1.0),
                    Token::Invalid("@#?!".to_string()),
                    Token::Number(2.0)]);
}

#[test]
fn tokenizer_is_pure() {
    let input = "3 -4 @ sqr + .";

    assert_eq!(tokenize(input), tokenize(input));
}

#[test]
fn invalid_lexemes_are_skipped_by_evaluation() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.evaluate_input("3 4 @ +"), "7.0");
    assert!(calculator.diagnostics().is_empty());
    assert!(tokenize("3 4 @ +").contains(&Token::Invalid("@".to_string())));
}

#[test]
fn division_by_zero_leaves_stack_untouched() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.evaluate_input("5 0 /"), "0.0");
    assert_eq!(calculator.diagnostics(), &[EvalError::DivisionByZero]);
    // Nothing was popped: the divisor is still on top, the dividend beneath.
    assert_eq!(calculator.stack().len(), 2);
    assert_eq!(calculator.stack().peek(), Some(0.0));
}

#[test]
fn underflow_on_empty_stack() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.evaluate_input("+"), "no value");
    assert_eq!(calculator.diagnostics(),
               &[EvalError::StackUnderflow { operator: Operator::Add,
                                             needed:   2,
                                             found:    0, }]);
    assert!(calculator.stack().is_empty());
}

#[test]
fn evaluation_continues_after_a_failure() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.evaluate_input("1 + 5"), "5.0");
    assert_eq!(calculator.diagnostics(),
               &[EvalError::StackUnderflow { operator: Operator::Add,
                                             needed:   2,
                                             found:    1, }]);
    assert_eq!(calculator.stack().len(), 2);
}

#[test]
fn stack_persists_across_calls() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.evaluate_input("3"), "3.0");
    assert_eq!(calculator.evaluate_input("4 +"), "7.0");

    // A failed division leaves both operands available for the next line.
    assert_eq!(calculator.evaluate_input("0 /"), "0.0");
    assert_eq!(calculator.evaluate_input("+"), "7.0");
}

#[test]
fn reset_clears_the_stack() {
    let mut calculator = Calculator::new();

    calculator.evaluate_input("3 4");
    calculator.reset();

    assert_eq!(calculator.evaluate_input("1 +"), "1.0");
    assert_eq!(calculator.diagnostics(),
               &[EvalError::StackUnderflow { operator: Operator::Add,
                                             needed:   2,
                                             found:    1, }]);
}

#[test]
fn unknown_symbols_resolve_to_nop() {
    assert_eq!(Operator::resolve("%"), Operator::Nop);
    assert_eq!(Operator::resolve("sqrt"), Operator::Nop);
    assert_eq!(Operator::resolve(""), Operator::Nop);
}

#[test]
fn nop_never_touches_the_stack() {
    let mut stack = OperandStack::new();
    stack.push(1.0);
    stack.push(2.0);

    assert!(Operator::Nop.apply(&mut stack).is_ok());
    assert_eq!(stack.len(), 2);

    // An unresolvable operator token degrades to a no-op at evaluation time,
    // without a diagnostic.
    let mut calculator = Calculator::new();
    let tokens = vec![Token::Number(6.0), Token::Operator("&".to_string())];

    assert_eq!(calculator.evaluate_tokens(&tokens), "6.0");
    assert!(calculator.diagnostics().is_empty());
}

#[test]
fn script_sessions_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "rpn"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let mut calculator = Calculator::new();

        for (i, line) in content.lines().enumerate() {
            let Some((input, expected)) = line.split_once("=>") else {
                continue;
            };
            count += 1;

            let result = calculator.evaluate_input(input.trim());
            assert_eq!(result,
                       expected.trim(),
                       "line {} in {:?}: {}",
                       i + 1,
                       path,
                       input.trim());
        }
    }

    assert!(count > 0, "No script sessions found in tests/scripts");
}
