use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A review belongs to one place and one user; both foreign keys are fixed
/// at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    pub place_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `place_id` comes from the request path, not the body.
#[derive(Clone, Debug, Deserialize)]
pub struct NewReview {
    pub text: String,
    pub user_id: Uuid,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReviewUpdate {
    pub text: Option<String>,
}

impl Review {
    pub fn new(place_id: Uuid, input: NewReview) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            text: input.text,
            place_id,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: ReviewUpdate) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        self.updated_at = Utc::now();
    }
}
