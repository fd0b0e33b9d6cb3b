use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE", type_name = "varchar")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShopStatus {
    #[default]
    Unpublished, // created, not visible in the catalog yet
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Shop {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub banned: Option<bool>, // NULL is treated the same as false
    pub status: ShopStatus,
    pub average_rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shop {
    pub fn is_banned(&self) -> bool {
        self.banned == Some(true)
    }
}

impl Default for Shop {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: String::new(),
            description: None,
            banned: None,
            status: ShopStatus::default(),
            average_rating: None,
            created_at: now,
            updated_at: now,
        }
    }
}
