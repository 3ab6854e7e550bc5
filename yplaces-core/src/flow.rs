//! Request/response cycles of the review and photo modals.
//!
//! Each flow locks its form before the request is sent and
//! unlocks it exactly once when the response has arrived.
//! The state is accessed through [`StateCell`] so the same flow
//! runs on reactive signals in the browser and on a `RefCell` in tests.

use std::{cell::RefCell, fmt};

use async_trait::async_trait;
use yplaces_boundary::{NewReview, Review};

use crate::{
    message::Msg,
    photo::{PhotoPanel, UploadOutcome, UploadRejection},
    review::{ReviewPanel, SubmitRejection},
};

#[async_trait(?Send)]
pub trait ReviewsGateway {
    type Error: fmt::Display;
    async fn create_review(&self, review: &NewReview) -> Result<Review, Self::Error>;
}

#[async_trait(?Send)]
pub trait PhotosGateway {
    /// The multipart body, built by the caller from the form.
    type Payload;
    type Error: fmt::Display;
    async fn upload_photo(&self, payload: &Self::Payload) -> Result<(), Self::Error>;
}

/// Shared, mutable state that is never borrowed across an `.await`.
pub trait StateCell<T> {
    /// Returns `None` if the state has been disposed.
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Failed,
}

impl SubmitOutcome {
    /// Notice that has to be confirmed by the user.
    #[must_use]
    pub const fn notice(self) -> Option<Msg> {
        match self {
            Self::Accepted => Some(Msg::ThankYouForReview),
            Self::Failed => None,
        }
    }
}

pub async fn submit_review<S, G>(state: &S, gateway: &G) -> Result<SubmitOutcome, SubmitRejection>
where
    S: StateCell<ReviewPanel>,
    G: ReviewsGateway,
{
    let new_review = state
        .modify(|panel| panel.form.begin_submit())
        .ok_or(SubmitRejection::Unavailable)??;
    log::debug!("Submit review (rating = {})", new_review.rating);
    let result = gateway.create_review(&new_review).await;
    state
        .modify(|panel| match result {
            Ok(review) => {
                log::info!("Review added");
                panel.accept(&review);
                SubmitOutcome::Accepted
            }
            Err(err) => {
                log::warn!("Unable to add review: {err}");
                panel.settle_failed();
                SubmitOutcome::Failed
            }
        })
        .ok_or(SubmitRejection::Unavailable)
}

pub async fn upload_photo<S, G>(
    state: &S,
    gateway: &G,
    payload: G::Payload,
) -> Result<UploadOutcome, UploadRejection>
where
    S: StateCell<PhotoPanel>,
    G: PhotosGateway,
{
    state
        .modify(|panel| panel.form.begin_upload())
        .ok_or(UploadRejection::Unavailable)??;
    log::debug!("Upload picture");
    let result = gateway.upload_photo(&payload).await;
    state
        .modify(|panel| match result {
            Ok(()) => {
                log::info!("Picture uploaded");
                panel.settle_uploaded()
            }
            Err(err) => {
                log::warn!("Unable to upload picture: {err}");
                panel.settle_failed()
            }
        })
        .ok_or(UploadRejection::Unavailable)
}
