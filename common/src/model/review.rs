use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A user-submitted rating and comment on one app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub app_id: String,
    pub name: String,
    pub rating: u8,
    pub text: String,
    pub approved: bool,
    /// Token issued to the anonymous submitter at creation time. It only
    /// correlates a caller with their own pending reviews.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Moderation view of a review, carrying the parent app's name. The name
/// is `None` once the app has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationReview {
    #[serde(flatten)]
    pub review: Review,
    pub app_name: Option<String>,
}

/// Payload of a review submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDraft {
    pub name: String,
    #[serde(deserialize_with = "coerce_rating")]
    pub rating: u8,
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Accepts `5`, `5.0` and `"5"` alike. Fractional or non-numeric values
/// are rejected; the 1..=5 range is checked by [`ReviewDraft::validate`].
fn coerce_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RatingInput::deserialize(deserializer)? {
        RatingInput::Integer(n) => n as f64,
        RatingInput::Float(f) => f,
        RatingInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("rating \"{}\" is not a number", text)))?,
    };
    if value.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&value) {
        return Err(D::Error::custom(format!(
            "rating must be a whole number between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }
    Ok(value as u8)
}

impl ReviewDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Review validation failed: name is required".to_string());
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(format!(
                "Review validation failed: rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            ));
        }
        Ok(())
    }
}

impl Review {
    /// Creates a pending review for `app_id`.
    pub fn from_draft(
        id: String,
        app_id: String,
        user_id: String,
        draft: ReviewDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        Review {
            id,
            app_id,
            name: draft.name,
            rating: draft.rating,
            text: draft.text,
            approved: false,
            user_id,
            created_at,
        }
    }
}

/// Whether a caller presenting `caller_token` may see `review`.
///
/// Approved reviews are public. A pending review is shown only to the
/// caller holding the token it was submitted with.
pub fn visible(review: &Review, caller_token: Option<&str>) -> bool {
    review.approved || caller_token.is_some_and(|token| token == review.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(approved: bool, user_id: &str) -> Review {
        Review {
            id: "r1".to_string(),
            app_id: "a1".to_string(),
            name: "Sam".to_string(),
            rating: 5,
            text: String::new(),
            approved,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn pending_review_visible_only_to_its_author() {
        let pending = review(false, "token-a");
        assert!(visible(&pending, Some("token-a")));
        assert!(!visible(&pending, Some("token-b")));
        assert!(!visible(&pending, None));
    }

    #[test]
    fn approved_review_visible_to_everyone() {
        let approved = review(true, "token-a");
        assert!(visible(&approved, None));
        assert!(visible(&approved, Some("token-b")));
        assert!(visible(&approved, Some("token-a")));
    }

    #[test]
    fn draft_rating_must_be_in_range() {
        let mut draft = ReviewDraft {
            name: "Sam".to_string(),
            rating: 0,
            text: String::new(),
        };
        assert!(draft.validate().is_err());
        draft.rating = 6;
        assert!(draft.validate().is_err());
        draft.rating = 3;
        assert!(draft.validate().is_ok());
        draft.name = " ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn draft_rating_coerces_numeric_forms() {
        for raw in [r#"4"#, r#"4.0"#, r#""4""#, r#"" 4 ""#] {
            let json = format!(r#"{{"name": "Sam", "rating": {raw}}}"#);
            let draft: ReviewDraft = serde_json::from_str(&json).unwrap();
            assert_eq!(draft.rating, 4);
        }

        for raw in [r#"4.5"#, r#""four""#, r#"-1"#, r#"300"#, r#"true"#] {
            let json = format!(r#"{{"name": "Sam", "rating": {raw}}}"#);
            assert!(serde_json::from_str::<ReviewDraft>(&json).is_err(), "{raw}");
        }
    }

    #[test]
    fn moderation_view_flattens_review() {
        let value = serde_json::to_value(ModerationReview {
            review: review(false, "t"),
            app_name: None,
        })
        .unwrap();
        assert_eq!(value["_id"], "r1");
        assert_eq!(value["userId"], "t");
        assert!(value["appName"].is_null());
    }
}
