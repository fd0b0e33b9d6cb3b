use serde::{Deserialize, Serialize};

/// Marketplace account. Only the public profile lives here; credentials and
/// roles belong to the identity provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub avatar: Option<String>,
}
