/// An abstract syntax tree (AST) node representing a BlueDOG expression.
///
/// The parser only ever produces two shapes: a lone number literal, or the
/// addition of two number literals. The enum is deliberately closed to these
/// two variants, so the evaluator needs no fallback branch for node kinds
/// that cannot exist.
///
/// Each node exclusively owns its children; the tree is built by the parser
/// and dropped by the caller once the result has been computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// A number literal.
    Number {
        /// The literal payload, kept as the exact lexeme text. Conversion to
        /// an integer happens during evaluation.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// The addition of two operands.
    Addition {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl AstNode {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use bluedog::ast::AstNode;
    ///
    /// let node = AstNode::Number { text: "7".to_string(),
    ///                              line: 3, };
    ///
    /// assert_eq!(node.line_number(), 3);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. } | Self::Addition { line, .. } => *line,
        }
    }
}
