use logos::Logos;

use crate::error::ParseError;

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed, including newlines inside string
/// literals.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Raw tokens produced by the scanning pass.
///
/// The scanner knows nothing about indentation: a newline together with the
/// spaces that follow it is captured as a single [`RawToken::Newline`]
/// carrying the width of the next line's leading whitespace. The structuring
/// pass in [`Lexer::new`] turns those widths into `Indent`/`Dedent` tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ ]+")]
enum RawToken {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// `class`
    #[token("class")]
    Class,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `def`
    #[token("def")]
    Def,
    /// `print`
    #[token("print")]
    Print,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `None`
    #[token("None")]
    None,
    /// `True`
    #[token("True")]
    True,
    /// `False`
    #[token("False")]
    False,
    /// Identifier tokens; variable, class, field or method names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Id(String),
    /// String literal tokens, single- or double-quoted, with their escape
    /// sequences resolved. An unterminated literal runs to the end of input.
    #[regex(r#""([^"\\]|\\[\s\S])*""#, parse_string)]
    #[regex(r#""([^"\\]|\\[\s\S])*"#, parse_string)]
    #[regex(r"'([^'\\]|\\[\s\S])*'", parse_string)]
    #[regex(r"'([^'\\]|\\[\s\S])*", parse_string)]
    String(String),
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<=`
    #[token("<=")]
    LessOrEq,
    /// `>=`
    #[token(">=")]
    GreaterOrEq,
    /// `# Comments.`
    ///
    /// Kept as a token rather than skipped: a comment is the first thing on
    /// its line, the line still counts as an indentation event.
    #[regex(r"#[^\n]*")]
    Comment,
    /// A newline plus the leading spaces of the following line; the payload
    /// is the number of those spaces.
    #[regex(r"\n[ ]*", newline_indent)]
    Newline(usize),
    /// Any other single character.
    #[regex(r".", symbol, priority = 0)]
    Symbol(char),
}

impl RawToken {
    /// Translates a scanned token into its public counterpart.
    ///
    /// Newlines and comments have no direct counterpart; they drive the
    /// structuring pass instead.
    fn into_plain(self) -> Option<Token> {
        match self {
            Self::Number(value) => Some(Token::Number(value)),
            Self::Id(name) => Some(Token::Id(name)),
            Self::String(value) => Some(Token::String(value)),
            Self::Symbol(c) => Some(Token::Char(c)),
            Self::Class => Some(Token::Class),
            Self::Return => Some(Token::Return),
            Self::If => Some(Token::If),
            Self::Else => Some(Token::Else),
            Self::Def => Some(Token::Def),
            Self::Print => Some(Token::Print),
            Self::And => Some(Token::And),
            Self::Or => Some(Token::Or),
            Self::Not => Some(Token::Not),
            Self::None => Some(Token::None),
            Self::True => Some(Token::True),
            Self::False => Some(Token::False),
            Self::Eq => Some(Token::Eq),
            Self::NotEq => Some(Token::NotEq),
            Self::LessOrEq => Some(Token::LessOrEq),
            Self::GreaterOrEq => Some(Token::GreaterOrEq),
            Self::Comment | Self::Newline(_) => Option::None,
        }
    }
}

/// Represents a lexical token in the source input.
///
/// This is the sequence the parser consumes: the raw scanned tokens plus the
/// synthetic `Newline`, `Indent`, `Dedent` and `Eof` tokens produced by the
/// indentation structuring pass. Equality compares both the token kind and
/// its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal.
    Number(i64),
    /// An identifier.
    Id(String),
    /// A string literal with escapes resolved.
    String(String),
    /// Any single character that is not otherwise classified, such as
    /// `+`, `(`, `:` or `=`.
    Char(char),
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
    /// End of a logical line; exactly one separates consecutive statements.
    Newline,
    /// Opening of an indentation-delimited block (one per two-space level).
    Indent,
    /// Closing of an indentation-delimited block.
    Dedent,
    /// End of input; the final token of every stream.
    Eof,
}

/// The `Lexer` turns source text into the finished token sequence.
///
/// Construction performs both passes eagerly: the raw scan and the
/// indentation structuring described below. Afterwards the stream is
/// consumed through [`current`](Self::current) and
/// [`advance`](Self::advance), which keeps returning [`Token::Eof`] once the
/// end is reached.
///
/// Indentation is measured in units of two spaces at the start of each
/// line; a level difference of `n` emits `n` `Indent` or `Dedent` tokens,
/// and widths that are not a multiple of two round down. Blank and
/// whitespace-only lines are ignored entirely. Consecutive newlines collapse
/// into a single `Newline`, and a newline at the very start of the input
/// emits nothing. At end of input any open indentation levels are closed,
/// a final `Newline` is supplied when the last token is not already a
/// `Newline`, `Indent` or `Dedent`, and `Eof` terminates the stream, so
/// `Indent` and `Dedent` always balance.
///
/// # Example
/// ```
/// use mython::interpreter::lexer::{Lexer, Token};
///
/// let lexer = Lexer::new("if a:\n  b\n").unwrap();
/// let tokens: Vec<_> = lexer.tokens().cloned().collect();
///
/// assert_eq!(tokens,
///            vec![Token::If,
///                 Token::Id("a".to_string()),
///                 Token::Char(':'),
///                 Token::Newline,
///                 Token::Indent,
///                 Token::Id("b".to_string()),
///                 Token::Newline,
///                 Token::Dedent,
///                 Token::Eof]);
/// ```
pub struct Lexer {
    tokens:   Vec<(Token, usize)>,
    position: usize,
}

impl Lexer {
    /// Tokenizes the whole source.
    ///
    /// # Errors
    /// Fails only when an integer literal does not fit in an `i64`; any
    /// other byte sequence lexes, pathological input ending up as `Char`
    /// tokens for the parser to reject.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut raw = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });
        let mut tokens: Vec<(Token, usize)> = Vec::new();
        let mut level = 0_usize;

        // The start of input is a line start, so leading spaces there are an
        // indentation measurement like those captured after every newline.
        let mut pending = Some(source.chars().take_while(|&c| c == ' ').count());

        while let Some(result) = raw.next() {
            let line = raw.extras.line;

            match result {
                Ok(RawToken::Newline(indent)) => {
                    if let Some((last, _)) = tokens.last()
                       && *last != Token::Newline
                    {
                        tokens.push((Token::Newline, line));
                    }
                    pending = Some(indent);
                },
                Ok(raw_token) => {
                    if let Some(spaces) = pending.take() {
                        Self::apply_indent(&mut tokens, &mut level, spaces, line);
                    }
                    if let Some(token) = raw_token.into_plain() {
                        tokens.push((token, line));
                    }
                },
                Err(()) => {
                    let slice = raw.slice();
                    return Err(if slice.bytes().all(|b| b.is_ascii_digit()) {
                                   ParseError::LiteralTooLarge { line }
                               } else {
                                   ParseError::UnexpectedToken { token: slice.to_string(),
                                                                 line }
                               });
                },
            }
        }

        let line = raw.extras.line;
        for _ in 0..level {
            tokens.push((Token::Dedent, line));
        }
        if let Some((last, _)) = tokens.last()
           && !matches!(last, Token::Newline | Token::Indent | Token::Dedent)
        {
            tokens.push((Token::Newline, line));
        }
        tokens.push((Token::Eof, line));

        Ok(Self { tokens, position: 0 })
    }

    /// Emits the `Indent`/`Dedent` tokens for a line starting with `spaces`
    /// spaces and updates the current level.
    fn apply_indent(tokens: &mut Vec<(Token, usize)>,
                    level: &mut usize,
                    spaces: usize,
                    line: usize) {
        let new_level = spaces / 2;

        for _ in *level..new_level {
            tokens.push((Token::Indent, line));
        }
        for _ in new_level..*level {
            tokens.push((Token::Dedent, line));
        }

        *level = new_level;
    }

    /// Returns the token at the current position.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.position].0
    }

    /// Returns the source line of the token at the current position.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens[self.position].1
    }

    /// Moves to the next token and returns it, staying on `Eof` past the
    /// end of the stream.
    pub fn advance(&mut self) -> &Token {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Saves the current position so a speculative parse can back out.
    #[must_use]
    pub fn checkpoint(&self) -> usize {
        self.position
    }

    /// Restores a position previously saved with
    /// [`checkpoint`](Self::checkpoint).
    pub fn rewind(&mut self, checkpoint: usize) {
        self.position = checkpoint.min(self.tokens.len() - 1);
    }

    /// Iterates over the finished token sequence without consuming it.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().map(|(token, _)| token)
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the digits do not fit in an `i64`.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Resolves a string literal from the current token slice.
///
/// Strips the surrounding quotes (the closing quote may be missing when the
/// literal runs to end of input) and processes the escape sequences `\'`,
/// `\"`, `\n`, `\t` and `\\`. Any other escaped character stands for itself
/// with the backslash dropped.
fn parse_string(lex: &mut logos::Lexer<RawToken>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    let mut chars = lex.slice().chars();
    let quote = chars.next();
    let mut value = String::new();

    while let Some(c) = chars.next() {
        if Some(c) == quote {
            break;
        }
        if c == '\\' {
            match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some(other) => value.push(other),
                Option::None => {},
            }
        } else {
            value.push(c);
        }
    }

    value
}

/// Counts the leading spaces of the line that a newline begins.
fn newline_indent(lex: &mut logos::Lexer<RawToken>) -> usize {
    lex.extras.line += 1;
    lex.slice().len() - 1
}

/// Extracts the single character behind an otherwise unclassified token.
fn symbol(lex: &logos::Lexer<RawToken>) -> Option<char> {
    lex.slice().chars().next()
}
