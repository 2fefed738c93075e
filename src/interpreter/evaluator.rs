use crate::{ast::AstNode, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an AST node and returns the resulting integer.
///
/// This is a pure recursive structural walk: a `Number` node converts its
/// literal text to an `i64`, and an `Addition` node evaluates both children
/// and adds them with overflow checking.
///
/// # Parameters
/// - `node`: The AST node to evaluate.
///
/// # Returns
/// The computed integer value.
///
/// # Errors
/// - `RuntimeError::MalformedNumber` if a literal's text is not a valid
///   decimal integer.
/// - `RuntimeError::Overflow` if the addition overflows.
///
/// # Examples
/// ```
/// use bluedog::{ast::AstNode, interpreter::evaluator::evaluate};
///
/// let left = AstNode::Number { text: "3".to_string(),
///                              line: 1, };
/// let right = AstNode::Number { text: "4".to_string(),
///                               line: 1, };
/// let sum = AstNode::Addition { left:  Box::new(left),
///                               right: Box::new(right),
///                               line:  1, };
///
/// assert_eq!(evaluate(&sum).unwrap(), 7);
/// ```
pub fn evaluate(node: &AstNode) -> EvalResult<i64> {
    match node {
        AstNode::Number { text, line } => {
            text.parse::<i64>()
                .map_err(|_| RuntimeError::MalformedNumber { text: text.clone(),
                                                             line: *line, })
        },

        AstNode::Addition { left, right, line } => {
            let left_val = evaluate(left)?;
            let right_val = evaluate(right)?;

            left_val.checked_add(right_val)
                    .ok_or(RuntimeError::Overflow { line: *line })
        },
    }
}
