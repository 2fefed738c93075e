use logos::Logos;

/// Represents a lexical token in BlueDOG source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Number literal tokens: a maximal run of decimal digits, such as `42`.
    /// The lexeme is kept as text; conversion to an integer happens during
    /// evaluation.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens: an alphabetic character followed by a maximal run
    /// of alphanumeric characters, such as `dog2`. Identifiers are lexed but
    /// are not part of the expression grammar.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `%`, reserved to introduce plugin directives in source text.
    #[token("%")]
    PluginMarker,
    /// `&`, reserved to introduce module directives in source text.
    #[token("&")]
    ModuleMarker,
    /// End of the token sequence. No lexer rule produces this variant; the
    /// driver appends it once the source is exhausted, and the parser turns
    /// it into an error where an operand is required.
    EndOfInput,

    /// Whitespace. Tabs, spaces, and feeds are skipped outright; newlines
    /// additionally advance the line counter.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Token {
    /// Returns the exact lexeme text consumed to form this token.
    ///
    /// Marker tokens and `EndOfInput` carry no text and yield the empty
    /// string.
    ///
    /// ## Example
    /// ```
    /// use bluedog::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Number("42".to_string()).lexeme(), "42");
    /// assert_eq!(Token::Plus.lexeme(), "+");
    /// assert_eq!(Token::PluginMarker.lexeme(), "");
    /// ```
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Number(text) | Self::Identifier(text) => text,
            Self::Plus => "+",
            Self::PluginMarker | Self::ModuleMarker | Self::EndOfInput | Self::Ignored => "",
        }
    }
}
