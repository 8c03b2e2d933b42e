//! Dice errors.

/// Errors raised when building dice from raw numbers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("no standard die has {sides} sides")]
    UnsupportedDie { sides: u32 },
}

impl DiceError {
    /// Stable code for logs and client messages.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedDie { .. } => "DICE_UNSUPPORTED_DIE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_and_code() {
        let err = DiceError::UnsupportedDie { sides: 7 };
        assert_eq!(err.to_string(), "no standard die has 7 sides");
        assert_eq!(err.error_code(), "DICE_UNSUPPORTED_DIE");
    }
}
