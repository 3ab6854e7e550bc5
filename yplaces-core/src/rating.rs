use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A single review rating within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingInvalidation {
    #[error("not a number: {0}")]
    NotANumber(#[from] ParseIntError),
    #[error("rating {0} is out of range")]
    OutOfRange(i64),
}

impl RatingValue {
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = RatingInvalidation;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&from) {
            // The range check guarantees that the value fits.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok(Self(from as u8))
        } else {
            Err(RatingInvalidation::OutOfRange(from))
        }
    }
}

impl FromStr for RatingValue {
    type Err = RatingInvalidation;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<i64>()?;
        Self::try_from(value)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

/// Width of a star bar, i.e. `rating * 100 / MAX_RATING` percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StarWidth(f64);

impl StarWidth {
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        if !rating.is_finite() {
            return Self(0.0);
        }
        let percent = (rating * 100.0 / f64::from(MAX_RATING)).clamp(0.0, 100.0);
        // Rounded to two decimals.
        Self((percent * 100.0).round() / 100.0)
    }

    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }
}

impl From<RatingValue> for StarWidth {
    fn from(from: RatingValue) -> Self {
        Self::from_rating(f64::from(from.0))
    }
}

impl fmt::Display for StarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ratings() {
        for (input, expected) in [("1", 1), ("3", 3), (" 5 ", 5)] {
            let rating: RatingValue = input.parse().unwrap();
            assert_eq!(rating.value(), expected);
        }
    }

    #[test]
    fn reject_ratings_out_of_range() {
        assert_eq!(
            "0".parse::<RatingValue>(),
            Err(RatingInvalidation::OutOfRange(0))
        );
        assert_eq!(
            "6".parse::<RatingValue>(),
            Err(RatingInvalidation::OutOfRange(6))
        );
        assert_eq!(
            "-3".parse::<RatingValue>(),
            Err(RatingInvalidation::OutOfRange(-3))
        );
    }

    #[test]
    fn reject_non_numeric_ratings() {
        for input in ["", "four", "4.5", "NaN"] {
            assert!(matches!(
                input.parse::<RatingValue>(),
                Err(RatingInvalidation::NotANumber(_))
            ));
        }
    }

    #[test]
    fn star_width_of_ratings() {
        assert_eq!(StarWidth::from_rating(4.0).to_string(), "80%");
        assert_eq!(StarWidth::from_rating(4.2).to_string(), "84%");
        assert_eq!(StarWidth::from_rating(5.0).to_string(), "100%");
        assert_eq!(StarWidth::from_rating(0.0).to_string(), "0%");
        assert_eq!(StarWidth::from_rating(3.33).to_string(), "66.6%");
        assert_eq!(StarWidth::from(RatingValue(1)).to_string(), "20%");
    }

    #[test]
    fn star_width_is_clamped() {
        assert_eq!(StarWidth::from_rating(7.0).percent(), 100.0);
        assert_eq!(StarWidth::from_rating(-1.0).percent(), 0.0);
        assert_eq!(StarWidth::from_rating(f64::NAN).percent(), 0.0);
    }
}
