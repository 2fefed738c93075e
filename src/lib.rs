//! # bluedog
//!
//! bluedog is a miniature interpreter for the BlueDOG toy language written in
//! Rust. It lexes, parses, and evaluates a single addition expression, and
//! runs a plugin/module dispatch pass keyed on the input filename before the
//! expression is parsed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
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

use logos::Logos;

use crate::{
    dispatch::Registry,
    error::ParseError,
    interpreter::{
        evaluator::evaluate,
        lexer::{LexerExtras, Token},
        parser::parse_expression,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `AstNode` enum that represents the syntactic
/// structure of source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for number literals and addition expressions.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Matches plugins and modules against input filenames.
///
/// This module holds the filename-keyed dispatch layer: the capability
/// interface, the built-in print plugin, the dynamic-library module loader,
/// and the registry that scans both lists in registration order.
///
/// # Responsibilities
/// - Defines the `Capability` trait shared by plugins and modules.
/// - Fires at most one plugin and at most one module per run.
/// - Confines all unsafe dynamic-loading calls to one module.
pub mod dispatch;
/// Provides unified error types for parsing, evaluation, and dispatch.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// evaluating, or module loading. It standardizes error reporting and carries
/// detailed information about failures, including source locations where they
/// are available.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   dispatch).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, and evaluation to provide the
/// runtime for BlueDOG source evaluation. It exposes the building blocks the
/// crate-level `execute` entry point drives.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Provides the per-phase entry points for tokenizing, parsing, and
///   evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs the dispatch pass and evaluates the source as one expression.
///
/// The full pipeline runs in a fixed order: the source is tokenized up
/// front (a lexing failure aborts the invocation), the registry fires at
/// most one plugin and one module whose names match the filename, and then
/// a single addition expression is parsed and evaluated from the token
/// stream. Dispatch runs before parsing, so plugin and module output
/// appears even when the expression is malformed or missing. Tokens after
/// the first expression are ignored.
///
/// # Parameters
/// - `source`: The BlueDOG source text to evaluate.
/// - `filename`: The input filename matched against the registry.
/// - `registry`: The plugin and module registry consulted for dispatch.
///
/// # Returns
/// The evaluated integer result of the expression.
///
/// # Errors
/// Returns an error if the source contains a character no token matches, if
/// the expression is malformed or missing, or if evaluation fails.
///
/// # Examples
/// ```
/// use bluedog::{dispatch::Registry, execute};
///
/// let registry = Registry::new();
///
/// assert_eq!(execute("3 + 4", "sum.bd", &registry).unwrap(), 7);
/// assert_eq!(execute("42", "answer.bd", &registry).unwrap(), 42);
/// ```
pub fn execute(source: &str,
               filename: &str,
               registry: &Registry)
               -> Result<i64, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    // The parser relies on an explicit terminator rather than iterator
    // exhaustion to report where the input ended.
    tokens.push((Token::EndOfInput, lexer.extras.line));

    registry.dispatch(filename);

    let mut iter = tokens.iter().peekable();

    let ast = parse_expression(&mut iter)?;
    let result = evaluate(&ast)?;

    Ok(result)
}
