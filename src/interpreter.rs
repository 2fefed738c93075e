/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, converts number
/// literals to integers, and performs the addition. It is a pure structural
/// recursion with no state of its own.
///
/// # Responsibilities
/// - Converts literal text to `i64` values, rejecting malformed text.
/// - Computes additions with overflow checking.
/// - Reports runtime errors with the source line they occurred on.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: number literals, identifiers, the `+` operator, and the plugin
/// and module marker characters. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace.
/// - Keeps each token's exact lexeme text and source line.
/// - Rejects unrecognized characters instead of stalling on them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence produced by the lexer and builds
/// the AST for exactly one expression: a number, or the addition of two
/// numbers. Every token consumption is bounds-checked, so running out of
/// tokens is a typed error rather than an out-of-range access.
///
/// # Responsibilities
/// - Converts tokens into `AstNode` trees.
/// - Reports an unexpected end of input with location info.
/// - Leaves any tokens after the expression untouched.
pub mod parser;
