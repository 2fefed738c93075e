use std::iter::Peekable;

use crate::{ast::AstNode, error::ParseError, interpreter::lexer::Token};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one BlueDOG expression.
///
/// This is the entry point for expression parsing. The grammar is
/// deliberately narrow; there is no recursion into longer operator chains,
/// no parenthesization, and no other operators.
///
/// Grammar: `expression := number | number "+" number`
///
/// Tokens after the expression are left in the iterator untouched.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` if the token sequence ends where an operand is
/// required.
///
/// # Examples
/// ```
/// use bluedog::interpreter::{lexer::Token, parser::parse_expression};
///
/// let tokens = vec![(Token::Number("1".to_string()), 1),
///                   (Token::Plus, 1),
///                   (Token::Number("2".to_string()), 1),
///                   (Token::EndOfInput, 1)];
/// let mut iter = tokens.iter().peekable();
///
/// let ast = parse_expression(&mut iter).unwrap();
/// assert_eq!(ast.line_number(), 1);
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_operand(tokens)?;

    if let Some((Token::Plus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_operand(tokens)?;

        return Ok(AstNode::Addition { left:  Box::new(left),
                                      right: Box::new(right),
                                      line, });
    }

    Ok(left)
}

/// Parses a single operand token into a `Number` node.
///
/// The operand's kind is not checked: whatever token is found contributes
/// its lexeme text as the node payload, and text that is not a valid literal
/// is rejected later, during evaluation. Only the end of the token sequence
/// is an error here.
fn parse_operand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::EndOfInput, line)) => {
            Err(ParseError::UnexpectedEndOfInput { line: *line })
        },
        Some((token, line)) => Ok(AstNode::Number { text: token.lexeme().to_string(),
                                                    line: *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
