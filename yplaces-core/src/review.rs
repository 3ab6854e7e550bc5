use thiserror::Error;
use time::{
    format_description::FormatItem, macros::format_description, Date, PrimitiveDateTime,
};
use yplaces_boundary::{NewReview, PlaceRating, Review};

use crate::{
    message::{Banner, Msg},
    rating::StarWidth,
    validate::ReviewInvalidation,
};

const DATE_TIME_INPUT_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATE_TIME_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
const DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

/// Raw input of the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: String,
    pub comment: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("a review is already being submitted")]
    Pending,
    #[error(transparent)]
    Invalid(#[from] ReviewInvalidation),
    #[error("review state is no longer available")]
    Unavailable,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewForm {
    draft: ReviewDraft,
    banners: Vec<Banner>,
    submitting: bool,
}

impl ReviewForm {
    #[must_use]
    pub const fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn set_rating(&mut self, rating: impl Into<String>) {
        self.draft.rating = rating.into();
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.draft.comment = comment.into();
    }

    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn dismiss_banner(&mut self, index: usize) {
        if index < self.banners.len() {
            self.banners.remove(index);
        }
    }

    /// `true` while a request is in flight; the submit control is disabled.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates the draft and, if valid, locks the form until
    /// [`settle_accepted`](Self::settle_accepted) or
    /// [`settle_failed`](Self::settle_failed) is called.
    pub fn begin_submit(&mut self) -> Result<NewReview, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::Pending);
        }
        self.banners.clear();
        match self.draft.to_new_review() {
            Ok(review) => {
                self.submitting = true;
                Ok(review)
            }
            Err(err) => {
                self.banners
                    .insert(0, Banner::warning(Msg::ProvideRatingAndComment));
                Err(err.into())
            }
        }
    }

    pub fn settle_accepted(&mut self) {
        self.submitting = false;
        self.draft = ReviewDraft::default();
    }

    pub fn settle_failed(&mut self) {
        self.submitting = false;
        self.banners.insert(0, Banner::danger(Msg::UnableToAddReview));
    }

    /// Unlocks the form after a failure that nobody can see.
    pub fn settle_unnoticed(&mut self) {
        self.submitting = false;
    }

    /// Clears input and banners; an in-flight request keeps the form locked.
    pub fn reset(&mut self) {
        self.draft = ReviewDraft::default();
        self.banners.clear();
    }
}

/// A rendered entry of the review list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub key: u64,
    pub avatar_url: String,
    pub stars: StarWidth,
    pub comment: String,
    pub author: String,
    pub date: String,
}

impl ReviewEntry {
    fn new(key: u64, review: &Review) -> Self {
        let Review {
            user,
            date,
            rating,
            comment,
            ..
        } = review;
        Self {
            key,
            avatar_url: user.photo_url.clone(),
            stars: StarWidth::from_rating(f64::from(*rating)),
            comment: comment.clone(),
            author: user.name.clone(),
            date: display_date(date),
        }
    }
}

fn display_date(date: &str) -> String {
    if let Ok(dt) = PrimitiveDateTime::parse(date, DATE_TIME_INPUT_FORMAT) {
        if let Ok(formatted) = dt.format(DATE_TIME_FORMAT) {
            return formatted;
        }
    }
    if let Ok(d) = Date::parse(date, DATE_FORMAT) {
        if let Ok(formatted) = d.format(DATE_FORMAT) {
            return formatted;
        }
    }
    date.to_owned()
}

/// The review list of a place together with its aggregated rating.
#[derive(Debug, Clone, Default)]
pub struct PlaceReviews {
    entries: Vec<ReviewEntry>,
    rating: PlaceRating,
    next_key: u64,
}

impl PlaceReviews {
    /// `reviews` are expected to be ordered newest first.
    #[must_use]
    pub fn new(rating: PlaceRating, reviews: &[Review]) -> Self {
        let mut list = Self {
            entries: Vec::with_capacity(reviews.len()),
            rating,
            next_key: 0,
        };
        for review in reviews {
            let entry = ReviewEntry::new(list.next_key(), review);
            list.entries.push(entry);
        }
        list
    }

    fn next_key(&mut self) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    #[must_use]
    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub const fn rating(&self) -> PlaceRating {
        self.rating
    }

    #[must_use]
    pub fn average_width(&self) -> StarWidth {
        StarWidth::from_rating(self.rating.average)
    }

    /// Puts a newly created review on top and takes over the
    /// average rating that the server calculated.
    pub fn accept(&mut self, review: &Review) {
        let entry = ReviewEntry::new(self.next_key(), review);
        self.entries.insert(0, entry);
        match review.place {
            Some(place) if place.rating.reviews > 0 => {
                self.rating = place.rating;
            }
            Some(place) => {
                self.rating.average = place.rating.average;
                self.rating.reviews += 1;
            }
            None => {
                log::warn!("Review response without place rating");
                self.rating.reviews += 1;
            }
        }
    }
}

/// State of the review modal and the review list it feeds.
#[derive(Debug, Clone, Default)]
pub struct ReviewPanel {
    pub form: ReviewForm,
    pub reviews: PlaceReviews,
    modal_open: bool,
}

impl ReviewPanel {
    #[must_use]
    pub fn new(reviews: PlaceReviews) -> Self {
        Self {
            form: ReviewForm::default(),
            reviews,
            modal_open: false,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn open(&mut self) {
        self.modal_open = true;
    }

    /// A pending request keeps its draft so a failure can be retried.
    pub fn close(&mut self) {
        self.modal_open = false;
        if !self.form.is_submitting() {
            self.form.reset();
        }
    }

    /// No banner is left behind in a closed modal.
    pub fn settle_failed(&mut self) {
        if self.modal_open {
            self.form.settle_failed();
        } else {
            self.form.settle_unnoticed();
        }
    }

    /// Applies a successful response: the list is updated first,
    /// then the form is cleared and unlocked and finally the modal is closed.
    pub fn accept(&mut self, review: &Review) {
        self.reviews.accept(review);
        self.form.settle_accepted();
        self.close();
    }
}
