#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use shopfront::configuration::{get_configuration, DatabaseSettings};
use shopfront::db::{MemoryStore, Store};
use shopfront::models;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

// we have to run server in another thread
pub async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let store = Arc::new(MemoryStore::new());
    let server = shopfront::startup::run(listener, store.clone() as Arc<dyn Store>)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp { address, store }
}

pub async fn seed_shop(store: &MemoryStore, id: i32, banned: Option<bool>) {
    store
        .insert_shop(models::Shop {
            id,
            name: format!("Shop {}", id),
            description: Some(format!("Everything from shop {}", id)),
            banned,
            status: models::ShopStatus::Published,
            average_rating: Some(4.5),
            ..Default::default()
        })
        .await;
}

pub async fn seed_user(store: &MemoryStore, id: i32) {
    store
        .insert_user(models::User {
            id,
            full_name: format!("User {}", id),
            avatar: Some(format!("https://cdn.example.com/avatars/{}.png", id)),
        })
        .await;
}

pub async fn seed_review(
    store: &MemoryStore,
    id: i32,
    shop_id: i32,
    user_id: i32,
    updated_at: DateTime<Utc>,
) {
    store
        .insert_review(models::Review {
            id,
            shop_id,
            user_id,
            rate: 5,
            comment: format!("review {}", id),
            created_at: updated_at,
            updated_at,
        })
        .await
        .expect("Failed to seed review");
}

/// Running top feed slideshow campaign for `shop_id`.
pub async fn seed_campaign(store: &MemoryStore, id: i32, shop_id: i32) {
    let now = Utc::now();
    store
        .insert_campaign(models::ShopPromotionCampaign {
            id,
            owner_id: 1,
            shop_id,
            start_date: now - Duration::days(7),
            end_date: now + Duration::days(7),
            campaign_type: models::CampaignType::TopFeedSlideshow.code(),
            active: true,
        })
        .await
        .expect("Failed to seed campaign");
}

/// Fresh, migrated PostgreSQL database for one test. `None` when no server is
/// reachable, so the caller can skip.
pub async fn spawn_database() -> Option<PgPool> {
    let mut settings = get_configuration().expect("Failed to get configuration");
    settings.database.database_name = uuid::Uuid::new_v4().to_string();

    match configure_database(&settings.database).await {
        Ok(pool) => Some(pool),
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            None
        }
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await?;

    Ok(connection_pool)
}
