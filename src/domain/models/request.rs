use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use rand::Rng;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct QuoteRequest {
    pub id: String,
    pub request_number: String,
    pub user_id: Option<String>,
    pub event_id: String,
    pub guests: i64,
    pub services: String,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub additional_info: String,
}

pub struct NewRequestParams {
    pub user_id: Option<String>,
    pub event_id: String,
    pub guests: i64,
    pub services: Vec<String>,
    pub total_price: i64,
    pub contact_name: String,
    pub contact_phone: String,
    pub additional_info: String,
}

impl QuoteRequest {
    pub fn new(params: NewRequestParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            request_number: generate_request_number(),
            user_id: params.user_id,
            event_id: params.event_id,
            guests: params.guests,
            // Stored as a comma-joined blob; split symmetric on read.
            services: params.services.join(","),
            total_price: params.total_price,
            created_at: Utc::now(),
            status: "NEW".to_string(),
            contact_name: params.contact_name,
            contact_phone: params.contact_phone,
            additional_info: params.additional_info,
        }
    }
}

// REQ-<UTC second-precision timestamp>-<6 hex chars>. Uniqueness is
// probabilistic; the UNIQUE constraint on the column is the backstop.
fn generate_request_number() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..0x100_0000);
    format!("REQ-{}-{:06X}", Utc::now().format("%Y%m%d%H%M%S"), suffix)
}

// Request joined to its event for display.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct QuoteRequestDetail {
    pub id: String,
    pub request_number: String,
    pub user_id: Option<String>,
    pub event_id: String,
    pub guests: i64,
    pub services: String,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub additional_info: String,
    pub event_title: String,
}
