use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

// date_text is free-form display text, not a validated calendar date.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub district: String,
    pub date_text: String,
    pub base_price: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        title: String,
        district: String,
        date_text: String,
        base_price: i64,
        description: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            district,
            date_text,
            base_price,
            description,
            created_at: Utc::now(),
        }
    }
}
