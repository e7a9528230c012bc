//! The time index of an interaction.

use std::cmp::Ordering;
use std::num::ParseFloatError;
use std::str::FromStr;

/// An error associated with parsing a [`Time`].
#[derive(Debug)]
pub enum ParseError {
    /// The value is not a number.
    InvalidNumber(ParseFloatError),

    /// The value is a number but is not finite (e.g., `NaN` or `inf`).
    NonFinite(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(err) => write!(f, "invalid number: {err}"),
            ParseError::NonFinite(value) => write!(f, "non-finite number: {value}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// The time index of an interaction.
///
/// The value is kept exactly as it was written in the table (so `"01"` stays
/// `"01"`), but a [`Time`] is only ever constructed from text that parses as
/// a finite number. Comparisons between times are always numeric.
#[derive(Clone, Debug)]
pub struct Time {
    /// The text as written in the table.
    raw: String,

    /// The numeric value of the text.
    value: f64,
}

impl Time {
    /// Gets the text of the [`Time`] as it was written in the table.
    ///
    /// This is the only place the original text survives. When serialized, a
    /// [`Time`] is written as its numeric value: integral values that fit in
    /// an `i64` are written as integers and everything else as an `f64`, so
    /// text such as `"01"` or `"12345678901234567890"` is not reproduced.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::record::Time;
    ///
    /// let time = "01".parse::<Time>()?;
    /// assert_eq!(time.as_str(), "01");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Gets the numeric value of the [`Time`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::record::Time;
    ///
    /// let time = "2.5".parse::<Time>()?;
    /// assert_eq!(time.value(), 2.5);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<f64>().map_err(ParseError::InvalidNumber)?;

        if !value.is_finite() {
            return Err(ParseError::NonFinite(s.into()));
        }

        // Negative zero is folded into zero so that `-0` and `0` compare equal.
        let value = if value == 0.0 { 0.0 } else { value };

        Ok(Self {
            raw: s.into(),
            value,
        })
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match as_integer(self.value) {
            Some(value) => serializer.serialize_i64(value),
            None => serializer.serialize_f64(self.value),
        }
    }
}

/// Gets a finite value as an `i64` if it is integral and fits.
#[cfg(feature = "serde")]
fn as_integer(value: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;

    match value.fract() == 0.0 && in_range {
        true => Some(value as i64),
        false => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_not_lexicographic_ordering() -> Result<(), Box<dyn std::error::Error>> {
        let two = "2".parse::<Time>()?;
        let ten = "10".parse::<Time>()?;

        assert!(two < ten);
        assert_eq!(
            ["10", "2", "1.5"]
                .into_iter()
                .map(|s| s.parse::<Time>())
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .max()
                .map(|t| t.to_string()),
            Some(String::from("10"))
        );

        Ok(())
    }

    #[test]
    fn test_equal_values_with_different_text() -> Result<(), Box<dyn std::error::Error>> {
        let a = "1".parse::<Time>()?;
        let b = "1.0".parse::<Time>()?;

        assert_eq!(a, b);
        assert_eq!(a.as_str(), "1");
        assert_eq!(b.as_str(), "1.0");

        Ok(())
    }

    #[test]
    fn test_signed_zeros_are_equal() -> Result<(), Box<dyn std::error::Error>> {
        let zero = "0".parse::<Time>()?;
        let negative_zero = "-0".parse::<Time>()?;

        assert_eq!(zero, negative_zero);
        assert_eq!(zero.cmp(&negative_zero), Ordering::Equal);
        assert_eq!(negative_zero.as_str(), "-0");
        assert!(negative_zero < "0.5".parse::<Time>()?);
        assert!("-0.5".parse::<Time>()? < negative_zero);

        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialization() -> Result<(), Box<dyn std::error::Error>> {
        let to_json = |s: &str| -> Result<String, Box<dyn std::error::Error>> {
            Ok(serde_json::to_string(&s.parse::<Time>()?)?)
        };

        assert_eq!(to_json("01")?, "1");
        assert_eq!(to_json("-0")?, "0");
        assert_eq!(to_json("2.5")?, "2.5");
        assert_eq!(to_json("12345678901234567890")?, "1.2345678901234567e19");

        Ok(())
    }

    #[test]
    fn test_invalid_times() {
        let err = "soon".parse::<Time>().unwrap_err();
        assert_eq!(err.to_string(), "invalid number: invalid float literal");

        let err = "NaN".parse::<Time>().unwrap_err();
        assert_eq!(err.to_string(), "non-finite number: NaN");

        assert!("inf".parse::<Time>().is_err());
    }
}
