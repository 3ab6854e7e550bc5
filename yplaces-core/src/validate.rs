use thiserror::Error;
use yplaces_boundary::NewReview;

use crate::{
    rating::{RatingInvalidation, RatingValue},
    review::ReviewDraft,
};

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewInvalidation {
    #[error("missing rating")]
    MissingRating,
    #[error(transparent)]
    Rating(#[from] RatingInvalidation),
    #[error("missing comment")]
    MissingComment,
}

impl ReviewDraft {
    /// Turns the raw form input into a review that can be submitted.
    pub fn to_new_review(&self) -> Result<NewReview, ReviewInvalidation> {
        let rating = self.rating.trim();
        if rating.is_empty() {
            return Err(ReviewInvalidation::MissingRating);
        }
        let rating = rating.parse::<RatingValue>()?;
        if self.comment.trim().is_empty() {
            return Err(ReviewInvalidation::MissingComment);
        }
        Ok(NewReview {
            rating: rating.into(),
            comment: self.comment.clone(),
        })
    }
}

impl Validate for ReviewDraft {
    type Error = ReviewInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        self.to_new_review().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: &str, comment: &str) -> ReviewDraft {
        ReviewDraft {
            rating: rating.into(),
            comment: comment.into(),
        }
    }

    #[test]
    fn valid_draft() {
        let review = draft("4", "Great food").to_new_review().unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.comment, "Great food");
    }

    #[test]
    fn comment_is_submitted_untrimmed() {
        let review = draft("2", " meh ").to_new_review().unwrap();
        assert_eq!(review.comment, " meh ");
    }

    #[test]
    fn missing_rating() {
        assert_eq!(
            draft("", "Great food").validate(),
            Err(ReviewInvalidation::MissingRating)
        );
        assert_eq!(
            draft("  ", "Great food").validate(),
            Err(ReviewInvalidation::MissingRating)
        );
    }

    #[test]
    fn invalid_rating() {
        assert_eq!(
            draft("9", "Great food").validate(),
            Err(ReviewInvalidation::Rating(RatingInvalidation::OutOfRange(9)))
        );
        assert!(matches!(
            draft("x", "Great food").validate(),
            Err(ReviewInvalidation::Rating(RatingInvalidation::NotANumber(_)))
        ));
    }

    #[test]
    fn missing_comment() {
        assert_eq!(
            draft("3", "").validate(),
            Err(ReviewInvalidation::MissingComment)
        );
        assert_eq!(
            draft("3", " \n\t").validate(),
            Err(ReviewInvalidation::MissingComment)
        );
    }
}
