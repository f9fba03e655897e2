use crate::model::rating::RatingBreakdown;
use serde::{Deserialize, Serialize};

/// Request payload for the admin password check.
#[derive(Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AuthResponse {
    pub success: bool,
}

/// Full star-count snapshot replacing an app's rating breakdown.
#[derive(Deserialize)]
pub struct SetRatingsRequest {
    pub ratings: RatingBreakdown,
}

/// Moderation decision for a single review.
#[derive(Deserialize)]
pub struct ApprovalRequest {
    pub approved: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
