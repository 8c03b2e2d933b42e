//! Digit-image themes.

use std::path::Path;

use crate::error::{TokenError, TokenResult};

/// Number of digit images a theme provides, one per decimal digit.
pub const DIGIT_COUNT: usize = 10;

const COUNTERS_DIR: &str = "share/tokens/counters";

/// Images used to draw a counter token.
///
/// `digits[n]` is the image for the decimal digit `n`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterTheme {
    pub background: String,
    pub digits: Vec<String>,
}

impl CounterTheme {
    /// Theme laid out under `<root>/<user_id>/share/tokens/counters/<theme>/`
    /// with `background.png` and `0.png` through `9.png`.
    pub fn standard(root: &Path, user_id: &str, theme: &str) -> Self {
        let dir = root.join(user_id).join(COUNTERS_DIR).join(theme);
        let image = |name: &str| dir.join(name).display().to_string();

        Self {
            background: image("background.png"),
            digits: (0..DIGIT_COUNT).map(|d| image(&format!("{d}.png"))).collect(),
        }
    }

    pub fn validate(&self) -> TokenResult<()> {
        if self.digits.len() == DIGIT_COUNT {
            Ok(())
        } else {
            Err(TokenError::MissingDigits {
                found: self.digits.len(),
            })
        }
    }

    pub(crate) fn into_parts(self) -> TokenResult<(String, [String; DIGIT_COUNT])> {
        let found = self.digits.len();
        let digits = <[String; DIGIT_COUNT]>::try_from(self.digits)
            .map_err(|_| TokenError::MissingDigits { found })?;
        Ok((self.background, digits))
    }
}
