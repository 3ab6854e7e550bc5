use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{FormData, RequestCredentials};

use yplaces_boundary::{NewReview, Review};
use yplaces_core::flow::{PhotosGateway, ReviewsGateway};

use crate::{into_json, into_unit, Error, Result};

const CSRF_HEADER: &str = "X-CSRFToken";

/// Reviews and photos API of a single place.
#[derive(Debug, Clone)]
pub struct PlaceApi {
    reviews_url: String,
    photos_url: String,
    csrf_token: Option<String>,
}

impl PlaceApi {
    #[must_use]
    pub const fn new(reviews_url: String, photos_url: String, csrf_token: Option<String>) -> Self {
        Self {
            reviews_url,
            photos_url,
            csrf_token,
        }
    }

    fn add_session_headers(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req.credentials(RequestCredentials::Include);
        match &self.csrf_token {
            Some(token) => req.header(CSRF_HEADER, token),
            None => req,
        }
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<Review> {
        let request = self
            .add_session_headers(Request::post(&self.reviews_url))
            .json(review)?;
        let response = request.send().await?;
        into_json(response).await
    }

    /// Posts the form as `multipart/form-data`.
    ///
    /// The browser sets the content type including the boundary.
    pub async fn upload_photo(&self, form_data: &FormData) -> Result<()> {
        let request = self
            .add_session_headers(Request::post(&self.photos_url))
            .body(form_data.clone())?;
        let response = request.send().await?;
        into_unit(response).await
    }
}

#[async_trait(?Send)]
impl ReviewsGateway for PlaceApi {
    type Error = Error;
    async fn create_review(&self, review: &NewReview) -> Result<Review> {
        Self::create_review(self, review).await
    }
}

#[async_trait(?Send)]
impl PhotosGateway for PlaceApi {
    type Payload = FormData;
    type Error = Error;
    async fn upload_photo(&self, payload: &FormData) -> Result<()> {
        Self::upload_photo(self, payload).await
    }
}
