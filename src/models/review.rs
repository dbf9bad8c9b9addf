use serde::{Deserialize, Serialize};

/// A guest review as returned by `GET /api/properties/{id}/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>, // Avatar image URL
}

/// Reviewer identity shown above a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewHeader {
    pub name: String,
    pub avatar: String,
    pub rating: Option<f64>,
}

impl Review {
    /// Present only when the review carries both a name and an avatar.
    pub fn header(&self) -> Option<ReviewHeader> {
        let name = self.name.as_deref().filter(|name| !name.is_empty())?;
        let avatar = self.avatar.as_deref().filter(|avatar| !avatar.is_empty())?;
        Some(ReviewHeader {
            name: name.to_string(),
            avatar: avatar.to_string(),
            rating: self.rating,
        })
    }
}

impl ReviewHeader {
    /// e.g. "5 stars". A zero rating is treated as unrated.
    pub fn rating_label(&self) -> Option<String> {
        self.rating
            .filter(|rating| *rating != 0.0)
            .map(|rating| format!("{} stars", rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_review_has_no_header() {
        let review: Review = serde_json::from_str(r#"{"id":"1","comment":"Great stay"}"#).unwrap();
        assert_eq!(review.comment, "Great stay");
        assert!(review.header().is_none());
    }

    #[test]
    fn header_requires_name_and_avatar() {
        let named: Review =
            serde_json::from_str(r#"{"id":"1","comment":"ok","name":"Sam","rating":4}"#).unwrap();
        assert!(named.header().is_none());

        let with_avatar: Review = serde_json::from_str(
            r#"{"id":"2","comment":"ok","avatar":"https://img.example/a.png","rating":4}"#,
        )
        .unwrap();
        assert!(with_avatar.header().is_none());
    }

    #[test]
    fn rating_label_formats_integral_and_fractional_ratings() {
        let review: Review = serde_json::from_str(
            r#"{"id":"3","comment":"ok","name":"Sam","avatar":"https://img.example/a.png","rating":5}"#,
        )
        .unwrap();
        let header = review.header().unwrap();
        assert_eq!(header.name, "Sam");
        assert_eq!(header.rating_label().as_deref(), Some("5 stars"));

        let half = ReviewHeader { rating: Some(4.5), ..header.clone() };
        assert_eq!(half.rating_label().as_deref(), Some("4.5 stars"));
    }

    #[test]
    fn header_without_rating_has_no_label() {
        let review = Review {
            id: "4".into(),
            comment: "Quiet street".into(),
            name: Some("Kim".into()),
            rating: None,
            avatar: Some("https://img.example/k.png".into()),
        };
        assert_eq!(review.header().unwrap().rating_label(), None);

        let zero = Review { rating: Some(0.0), ..review };
        assert_eq!(zero.header().unwrap().rating_label(), None);
    }
}
