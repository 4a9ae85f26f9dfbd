use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityKey, sanitize_html};
use crate::domain::{Keyed, Materialize, Queryable};

/// A booking policy shown to customers (cancellation windows, late arrival
/// rules and similar). The body is authored in a rich-text editor and stored
/// as sanitized HTML.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BookingPolicy {
    #[serde(alias = "_id")]
    pub id: EntityKey,
    pub title: String,
    pub body: String,
    pub position: u32,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewBookingPolicy {
    pub title: String,
    pub body: String,
    pub position: u32,
}

impl NewBookingPolicy {
    #[must_use]
    pub fn new(title: String, body: String, position: u32) -> Self {
        Self {
            title: title.trim().to_string(),
            body: sanitize_html(&body),
            position,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateBookingPolicy {
    pub title: Option<String>,
    pub body: Option<String>,
    pub position: Option<u32>,
}

impl UpdateBookingPolicy {
    #[must_use]
    pub fn new(title: Option<String>, body: Option<String>, position: Option<u32>) -> Self {
        Self {
            title: title.map(|t| t.trim().to_string()),
            body: body.map(|b| sanitize_html(&b)),
            position,
        }
    }
}

impl Keyed for BookingPolicy {
    fn key(&self) -> &EntityKey {
        &self.id
    }
}

impl Queryable for BookingPolicy {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.body]
    }
}

impl Materialize for BookingPolicy {
    type Create = NewBookingPolicy;
    type Update = UpdateBookingPolicy;

    fn materialize(key: EntityKey, payload: &NewBookingPolicy) -> Self {
        Self {
            id: key,
            title: payload.title.clone(),
            body: payload.body.clone(),
            position: payload.position,
            updated_at: Utc::now().naive_utc(),
        }
    }

    fn merge(&mut self, updates: &UpdateBookingPolicy) {
        if let Some(title) = &updates.title {
            self.title = title.clone();
        }
        if let Some(body) = &updates.body {
            self.body = body.clone();
        }
        if let Some(position) = updates.position {
            self.position = position;
        }
        self.updated_at = Utc::now().naive_utc();
    }
}
