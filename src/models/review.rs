use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

pub const DEFAULT_RATE: i32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub shop_id: i32,
    pub user_id: i32,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rate: i32,
    #[validate(max_length = 255)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Review {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            shop_id: 0,
            user_id: 0,
            rate: DEFAULT_RATE,
            comment: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// One row of the review listing join: review columns, the owning shop's
/// ban flag and the author's public profile.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRow {
    pub id: i32,
    pub shop_id: i32,
    pub rate: i32,
    pub comment: String,
    pub updated_at: DateTime<Utc>,
    pub shop_banned: Option<bool>,
    pub user_id: i32,
    pub user_full_name: String,
    pub user_avatar: Option<String>,
}
