use crate::interpreter::lexer::Token;

/// Binary arithmetic operators of `aexpr` and `term`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
}

impl ArithmeticOperator {
    /// Applies the operator with 64-bit overflow checking.
    ///
    /// # Example
    /// ```
    /// use minint::operator::ArithmeticOperator;
    ///
    /// assert_eq!(ArithmeticOperator::Sub.apply(2, 5), Some(-3));
    /// assert_eq!(ArithmeticOperator::Mul.apply(i64::MAX, 2), None);
    /// ```
    #[must_use]
    pub const fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
        }
    }
}

/// Relational operators of `bexpr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
}

impl RelationalOperator {
    /// Maps a token to its relational operator, if it is one.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::EqualEqual => Some(Self::Equal),
            Token::BangEqual => Some(Self::NotEqual),
            Token::Less => Some(Self::Less),
            Token::Greater => Some(Self::Greater),
            _ => None,
        }
    }

    /// Compares two values.
    #[must_use]
    pub const fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::Equal => lhs == rhs,
            Self::NotEqual => lhs != rhs,
            Self::Less => lhs < rhs,
            Self::Greater => lhs > rhs,
        }
    }
}
