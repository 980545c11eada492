use logos::Logos;

/// Represents a lexical token in a calculator input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the notation.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `-7`.
    ///
    /// A leading minus belongs to the literal only when digits follow it
    /// directly. Longest match decides: `-4` is one number token, while a
    /// bare `-` is left to the operator alternative below.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Operator symbol tokens: `+`, `-`, `*`, `/` and `sqr`.
    ///
    /// The symbol is kept as text; it is resolved to a behavior by the
    /// evaluator, not by the lexer.
    #[token("+", operator_symbol)]
    #[token("-", operator_symbol)]
    #[token("*", operator_symbol)]
    #[token("/", operator_symbol)]
    #[token("sqr", operator_symbol)]
    Operator(String),
    /// Unrecognized input.
    ///
    /// A maximal run of characters that is not whitespace, not part of a
    /// number and not an operator symbol. Digits, operator symbols and
    /// whitespace end the run, so `sqrt` lexes as one invalid token rather
    /// than `sqr` followed by `t`. The raw text is preserved for
    /// diagnostics; the evaluator skips these tokens.
    #[regex(r"[^ \t\n\r\f0-9+*/-]+", |lex| lex.slice().to_string())]
    Invalid(String),
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

/// Tokenizes one line of raw calculator input.
///
/// The input is scanned left to right with longest-match semantics. Tokens
/// appear in input order; whitespace separates tokens and never becomes one.
/// The function is pure: tokenizing the same string twice yields identical
/// sequences.
///
/// # Example
/// ```
/// use postfixa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("3 -4 +");
///
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Number(-4.0),
///                 Token::Operator("+".to_string())]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            tokens.push(Token::Invalid(lexer.slice().to_string()));
        }
    }

    tokens
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid literal.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Returns the operator symbol matched by the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The matched symbol as an owned string.
fn operator_symbol(lex: &logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}
