use serde::{Deserialize, Deserializer};
use thiserror::Error;
use yplaces_boundary::{PageAction, Place, Review};

use crate::{
    photo::{AfterUpload, PhotoPanel},
    review::{PlaceReviews, ReviewPanel},
};

/// ID of the `<script type="application/json">` element
/// that carries the page configuration.
pub const CONFIG_ELEMENT_ID: &str = "yplaces-config";

/// Everything the page needs to know that is rendered by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub place: Place,
    pub reviews_api_url: String,
    pub photos_api_url: String,
    #[serde(default = "default_request_path")]
    pub request_path: String,
    #[serde(default, deserialize_with = "lenient_action")]
    pub action: Option<PageAction>,
    #[serde(default)]
    pub after_upload: AfterUpload,
    #[serde(default)]
    pub csrf_token: Option<String>,
    /// Newest first.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

fn default_request_path() -> String {
    "/".to_string()
}

/// Empty or unknown actions open no modal.
fn lenient_action<'de, D>(deserializer: D) -> Result<Option<PageAction>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_action))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing {0}")]
    MissingUrl(&'static str),
    #[error("invalid coordinates ({lat}, {lng})")]
    Coordinates { lat: f64, lng: f64 },
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.check()?;
        Ok(cfg)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.reviews_api_url.trim().is_empty() {
            return Err(ConfigError::MissingUrl("reviews_api_url"));
        }
        if self.photos_api_url.trim().is_empty() {
            return Err(ConfigError::MissingUrl("photos_api_url"));
        }
        let Place {
            latitude: lat,
            longitude: lng,
            ..
        } = self.place;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(ConfigError::Coordinates { lat, lng });
        }
        Ok(())
    }

    /// The action of the configuration wins over the `?action=` query value.
    #[must_use]
    pub fn initial_action(&self, query_value: Option<&str>) -> Option<PageAction> {
        self.action.or_else(|| query_value.and_then(parse_action))
    }

    #[must_use]
    pub fn review_panel(&self) -> ReviewPanel {
        ReviewPanel::new(PlaceReviews::new(self.place.rating, &self.reviews))
    }

    #[must_use]
    pub fn photo_panel(&self) -> PhotoPanel {
        PhotoPanel::new(self.after_upload, self.request_path.clone())
    }
}

#[must_use]
pub fn parse_action(value: &str) -> Option<PageAction> {
    match value.trim() {
        "write_review" => Some(PageAction::WriteReview),
        "add_photo" => Some(PageAction::AddPhoto),
        "" => None,
        unknown => {
            log::debug!("Ignore unknown page action '{unknown}'");
            None
        }
    }
}
