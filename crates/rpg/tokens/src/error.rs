//! Token errors.

/// Errors raised while building or rendering counter tokens.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The counter value has more decimal places than a token can show.
    #[error("value {value} has {digits} digits; tokens show at most {max}")]
    TooManyDigits { value: i64, digits: usize, max: usize },

    /// A theme does not provide one image per decimal digit.
    #[error("theme provides {found} digit images; expected 10")]
    MissingDigits { found: usize },
}

impl TokenError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::TooManyDigits { .. } => "TOKEN_TOO_MANY_DIGITS",
            Self::MissingDigits { .. } => "TOKEN_MISSING_DIGITS",
        }
    }
}

/// Result alias for token operations.
pub type TokenResult<T> = Result<T, TokenError>;
