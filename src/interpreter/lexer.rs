use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Maximum number of characters in a numeric literal or identifier.
pub const MAX_LEXEME_LEN: usize = 10;

/// Represents a lexical token of the language.
///
/// Every whitespace-delimited piece of a line classifies as exactly one of
/// these. Keywords are matched exactly and case-sensitively, so they take
/// precedence over the identifier class.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`, also spelled with an en dash or a minus sign.
    #[token("-")]
    #[token("\u{2013}")]
    #[token("\u{2212}")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `print`
    #[token("print")]
    Print,
    /// `integer`
    #[token("integer")]
    Integer,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// Unsigned decimal literal of at most ten digits, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// Lowercase identifier of at most ten letters, such as `count`.
    #[regex(r"[a-z]+", parse_identifier)]
    Identifier(String),
    /// Sentinel closing every tokenized line. Never produced from source text.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = match self {
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Print => "print",
            Self::Integer => "integer",
            Self::While => "while",
            Self::Do => "do",
            Self::If => "if",
            Self::Else => "else",
            Self::Number(value) => return write!(f, "{value}"),
            Self::Identifier(name) => name,
            Self::End => "",
        };
        f.write_str(lexeme)
    }
}

impl Token {
    /// Describes the token for diagnostics, e.g. `'while'` or `end of line`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::End => "end of line".to_string(),
            token => format!("'{token}'"),
        }
    }
}

/// Splits a line on whitespace and classifies every piece.
///
/// A line with no pieces yields an empty vector, which callers treat as "do
/// nothing". Any other successful result is terminated by exactly one
/// [`Token::End`].
///
/// # Errors
/// Returns a [`LexError`] for the first piece that is not a single valid
/// token. The remaining pieces are not examined.
///
/// # Example
/// ```
/// use minint::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("print x ;").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Print, Token::Identifier("x".into()), Token::Semicolon, Token::End]);
///
/// assert!(tokenize("   ").unwrap().is_empty());
/// assert!(tokenize("x=1 ;").is_err());
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = line.split_whitespace()
                         .enumerate()
                         .map(|(index, piece)| classify(piece, index))
                         .collect::<Result<Vec<_>, _>>()?;

    if !tokens.is_empty() {
        tokens.push(Token::End);
    }
    trace!(count = tokens.len(), "tokenized line");

    Ok(tokens)
}

/// Classifies a single whitespace-free piece.
///
/// The piece must be matched by exactly one token spanning all of it, so
/// `x=1` is rejected rather than split into three tokens.
///
/// # Errors
/// Returns [`LexError::TooLong`] for over-long numbers and identifiers, and
/// [`LexError::Unrecognized`] for everything else that fails to classify.
pub fn classify(piece: &str, index: usize) -> Result<Token, LexError> {
    let mut lexer = Token::lexer(piece);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(token)), None) => Ok(token),
        _ if piece.len() > MAX_LEXEME_LEN
             && (piece.bytes().all(|b| b.is_ascii_digit())
                 || piece.bytes().all(|b| b.is_ascii_lowercase())) =>
        {
            Err(LexError::TooLong { piece: piece.to_string(),
                                    index,
                                    limit: MAX_LEXEME_LEN })
        },
        _ => Err(LexError::Unrecognized { piece: piece.to_string(),
                                          index }),
    }
}

/// Parses a numeric literal, rejecting slices longer than [`MAX_LEXEME_LEN`].
fn parse_number(lex: &logos::Lexer<Token>) -> Option<i64> {
    let slice = lex.slice();
    if slice.len() > MAX_LEXEME_LEN {
        return None;
    }
    slice.parse().ok()
}

/// Copies an identifier, rejecting slices longer than [`MAX_LEXEME_LEN`].
fn parse_identifier(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    (slice.len() <= MAX_LEXEME_LEN).then(|| slice.to_string())
}
