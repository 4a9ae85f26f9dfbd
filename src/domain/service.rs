use serde::{Deserialize, Serialize};

use crate::domain::types::EntityKey;
use crate::domain::{Keyed, Materialize, Queryable};

/// A bookable spa treatment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpaService {
    #[serde(alias = "_id")]
    pub id: EntityKey,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price_cents: i64,
    pub category: String,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewSpaService {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price_cents: i64,
    pub category: String,
}

impl NewSpaService {
    #[must_use]
    pub fn new(
        name: String,
        description: String,
        duration_minutes: u32,
        price_cents: i64,
        category: String,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            duration_minutes,
            price_cents,
            category: category.trim().to_lowercase(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateSpaService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
    pub price_cents: Option<i64>,
    pub category: Option<String>,
    pub active: Option<bool>,
}

impl Keyed for SpaService {
    fn key(&self) -> &EntityKey {
        &self.id
    }
}

impl Queryable for SpaService {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.category]
    }

    fn filter_field(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Materialize for SpaService {
    type Create = NewSpaService;
    type Update = UpdateSpaService;

    fn materialize(key: EntityKey, payload: &NewSpaService) -> Self {
        Self {
            id: key,
            name: payload.name.clone(),
            description: payload.description.clone(),
            duration_minutes: payload.duration_minutes,
            price_cents: payload.price_cents,
            category: payload.category.clone(),
            active: true,
        }
    }

    fn merge(&mut self, updates: &UpdateSpaService) {
        if let Some(name) = &updates.name {
            self.name = name.clone();
        }
        if let Some(description) = &updates.description {
            self.description = description.clone();
        }
        if let Some(duration_minutes) = updates.duration_minutes {
            self.duration_minutes = duration_minutes;
        }
        if let Some(price_cents) = updates.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(category) = &updates.category {
            self.category = category.clone();
        }
        if let Some(active) = updates.active {
            self.active = active;
        }
    }
}
