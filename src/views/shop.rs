use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub banned: Option<bool>,
    pub status: models::ShopStatus,
    pub average_rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Shop> for Shop {
    fn from(shop: models::Shop) -> Self {
        Self {
            id: shop.id,
            name: shop.name,
            description: shop.description,
            banned: shop.banned,
            status: shop.status,
            average_rating: shop.average_rating,
            created_at: shop.created_at,
            updated_at: shop.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShopList {
    pub shops: Vec<Shop>,
}
