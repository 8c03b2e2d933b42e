//! Counter tokens.

use std::collections::BTreeMap;

use rpg_core::Counter;
use rpg_vectors::Vector3;
use strum::{EnumCount, IntoEnumIterator};

use crate::error::{TokenError, TokenResult};
use crate::theme::{CounterTheme, DIGIT_COUNT};

/// Decimal place of a digit, least significant first.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DigitPlace {
    Ones,
    Tens,
    Hundreds,
    Thousands,
    TenThousands,
    HundredThousands,
    Millions,
    TenMillions,
    HundredMillions,
    Billions,
}

/// A tabletop token showing a counter with one image per digit.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CounterToken {
    pub counter: Counter,
    pub position: Vector3,
    pub background: String,
    /// `digits[n]` is the image drawn for the decimal digit `n`.
    pub digits: [String; DIGIT_COUNT],
}

impl CounterToken {
    /// Unthemed token at the origin with a fresh counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the theme's background and digit images.
    pub fn with_theme(mut self, theme: CounterTheme) -> TokenResult<Self> {
        let (background, digits) = theme.into_parts()?;
        self.background = background;
        self.digits = digits;
        Ok(self)
    }

    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = background.into();
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Image for each decimal place of the current counter value.
    ///
    /// Only the places the value actually uses are present; zero maps just
    /// the ones place.
    pub fn digit_images(&self) -> TokenResult<BTreeMap<DigitPlace, String>> {
        let value = self.counter.value();
        let text = value.to_string();
        if text.len() > DigitPlace::COUNT {
            tracing::debug!(value, "counter value too wide for token");
            return Err(TokenError::TooManyDigits {
                value,
                digits: text.len(),
                max: DigitPlace::COUNT,
            });
        }

        let images = DigitPlace::iter()
            .zip(text.bytes().rev())
            .map(|(place, b)| (place, self.digits[usize::from(b - b'0')].clone()))
            .collect();
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> CounterToken {
        let mut token = CounterToken::new();
        token.digits = core::array::from_fn(|d| d.to_string());
        token
    }

    #[test]
    fn new_token_is_blank() {
        let token = CounterToken::new();
        assert_eq!(token.counter, Counter::new());
        assert_eq!(token.position, Vector3::ZERO);
        assert!(token.background.is_empty());
        assert_eq!(token.digits.len(), DIGIT_COUNT);
    }

    #[test]
    fn setters() {
        let mut token = CounterToken::new();
        token.set_background("bg.png");
        token.set_position(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(token.background, "bg.png");
        assert_eq!(token.position.z, 3.0);
    }

    #[test]
    fn ten_digit_value_fills_every_place() {
        let mut token = numbered();
        token.counter.set_value(1_359_487_620);

        let images = token.digit_images().unwrap();
        assert_eq!(images.len(), 10);
        assert_eq!(images[&DigitPlace::Ones], "0");
        assert_eq!(images[&DigitPlace::Tens], "2");
        assert_eq!(images[&DigitPlace::Thousands], "7");
        assert_eq!(images[&DigitPlace::Billions], "1");
    }

    #[test]
    fn zero_uses_only_the_ones_place() {
        let images = numbered().digit_images().unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[&DigitPlace::Ones], "0");
    }

    #[test]
    fn eleven_digits_is_too_many() {
        let mut token = numbered();
        token.counter.set_value(12_345_678_901);
        let err = token.digit_images().unwrap_err();
        assert_eq!(
            err,
            TokenError::TooManyDigits {
                value: 12_345_678_901,
                digits: 11,
                max: 10
            }
        );
    }

    #[test]
    fn place_names() {
        assert_eq!(DigitPlace::Ones.to_string(), "ones");
        assert_eq!(DigitPlace::TenThousands.as_ref(), "ten-thousands");
        assert_eq!(
            "hundred-millions".parse::<DigitPlace>().unwrap(),
            DigitPlace::HundredMillions
        );
        assert_eq!(DigitPlace::COUNT, DIGIT_COUNT);
    }

    #[test]
    fn with_theme_requires_ten_digits() {
        let theme = CounterTheme {
            background: "bg.png".into(),
            digits: vec!["0.png".into()],
        };
        assert_eq!(
            CounterToken::new().with_theme(theme),
            Err(TokenError::MissingDigits { found: 1 })
        );
    }
}
