use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id           : Option<u64>,
    pub name         : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address      : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code  : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city         : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country      : Option<String>,
    pub latitude     : f64,
    pub longitude    : f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website      : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description  : Option<String>,
    #[serde(default)]
    pub rating       : PlaceRating,
}

/// Aggregated rating of a place as computed by the server.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct PlaceRating {
    pub average: f64,
    #[serde(default)]
    pub reviews: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewReview {
    pub rating: u8,
    pub comment: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub user: ReviewAuthor,
    pub date: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Only present in the response to a newly created review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<ReviewedPlace>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ReviewAuthor {
    pub name: String,
    /// Empty if the user has no avatar.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photo_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct ReviewedPlace {
    pub rating: PlaceRating,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum PageAction {
    WriteReview,
    AddPhoto,
}

/// Error body of the yplaces API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message} (HTTP status {http_status})"))]
pub struct Error {
    #[serde(default)]
    pub http_status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_created_review() {
        let json = r#"{
            "rating": 4,
            "comment": "Great food",
            "date": "2024-01-01",
            "user": { "name": "Ann", "photo_url": "/a.jpg" },
            "place": { "rating": { "average": 4.2 } }
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.comment, "Great food");
        assert_eq!(review.user.name, "Ann");
        assert_eq!(review.user.photo_url, "/a.jpg");
        assert_eq!(review.id, None);
        let place = review.place.unwrap();
        assert_eq!(place.rating.average, 4.2);
        assert_eq!(place.rating.reviews, 0);
    }

    #[test]
    fn deserialize_serialized_review_without_place() {
        let json = r#"{
            "id": 7,
            "url": "http://localhost/api/places/1/reviews/7",
            "user": { "name": "Bob", "photo_url": "/b.png" },
            "date": "2014-03-02 18:10:05",
            "rating": 5,
            "comment": "Nice",
            "photo": null
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, Some(7));
        assert!(review.photo.is_none());
        assert!(review.place.is_none());
    }

    #[test]
    fn deserialize_author_without_avatar() {
        let json = r#"{ "name": "Ann", "photo_url": null }"#;
        let author: ReviewAuthor = serde_json::from_str(json).unwrap();
        assert_eq!(author.photo_url, "");
        let author: ReviewAuthor = serde_json::from_str(r#"{ "name": "Ann" }"#).unwrap();
        assert_eq!(author.photo_url, "");
    }

    #[test]
    fn serialize_new_review() {
        let review = NewReview {
            rating: 4,
            comment: "Great food".into(),
        };
        assert_eq!(
            serde_json::to_string(&review).unwrap(),
            r#"{"rating":4,"comment":"Great food"}"#
        );
    }

    #[test]
    fn deserialize_place_without_rating() {
        let json = r#"{ "name": "Cafe", "latitude": 41.15, "longitude": -8.61 }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.rating, PlaceRating::default());
        assert!(place.address.is_none());
    }

    #[test]
    fn page_action_names() {
        let action: PageAction = serde_json::from_str(r#""write_review""#).unwrap();
        assert_eq!(action, PageAction::WriteReview);
        let action: PageAction = serde_json::from_str(r#""add_photo""#).unwrap();
        assert_eq!(action, PageAction::AddPhoto);
    }

    #[test]
    fn deserialize_invalid_parameters_error() {
        let json = r#"{
            "message": "Invalid parameters",
            "parameters": { "rating": ["Required"] }
        }"#;
        let err: Error = serde_json::from_str(json).unwrap();
        assert_eq!(err.http_status, 0);
        assert_eq!(err.parameters["rating"], vec!["Required".to_string()]);
    }
}
