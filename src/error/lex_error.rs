use thiserror::Error;

/// Represents all errors that can occur while tokenizing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A piece matched none of the token classes.
    #[error("Piece {index}: '{piece}' is not a valid token.")]
    Unrecognized {
        /// The offending whitespace-delimited piece.
        piece: String,
        /// Position of the piece within the line, counting from zero.
        index: usize,
    },
    /// A number or identifier exceeded the maximum lexeme length.
    #[error("Piece {index}: '{piece}' is longer than {limit} characters.")]
    TooLong {
        /// The offending whitespace-delimited piece.
        piece: String,
        /// Position of the piece within the line, counting from zero.
        index: usize,
        /// The maximum number of characters allowed.
        limit: usize,
    },
    /// The line is not valid UTF-8 and cannot be split into pieces.
    #[error("Line is not valid UTF-8 after byte {valid_up_to}.")]
    InvalidEncoding {
        /// Length of the longest valid UTF-8 prefix of the line.
        valid_up_to: usize,
    },
}
