use serde::Deserialize;

// Form fields default to empty rather than rejecting the request; emptiness
// is validated in the handlers so the user sees a notice, not a 422.

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignupForm {
    pub fn email_opt(&self) -> Option<String> {
        let email = self.email.trim();
        if email.is_empty() {
            None
        } else {
            Some(email.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SigninForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub district: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub guests: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub additional_info: String,
}

impl QuoteForm {
    // Missing, non-numeric, or negative input all coerce to zero guests.
    pub fn guest_count(&self) -> i64 {
        self.guests
            .trim()
            .parse::<i64>()
            .map(|g| g.max(0))
            .unwrap_or(0)
    }
}
