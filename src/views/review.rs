use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public profile of a review author.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub id: i32,
    pub full_name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub shop_id: i32,
    pub rate: i32,
    pub comment: String,
    pub updated_at: DateTime<Utc>,
    pub user: ReviewAuthor,
}

// The shop columns only feed the ban filter and are dropped here.
impl From<models::ReviewRow> for Review {
    fn from(row: models::ReviewRow) -> Self {
        Self {
            id: row.id,
            shop_id: row.shop_id,
            rate: row.rate,
            comment: row.comment,
            updated_at: row.updated_at,
            user: ReviewAuthor {
                id: row.user_id,
                full_name: row.user_full_name,
                avatar: row.user_avatar,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewList {
    pub reviews: Vec<Review>,
}
