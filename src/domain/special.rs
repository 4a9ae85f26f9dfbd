use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityKey, MonthTag, sanitize_html};
use crate::domain::{Keyed, Materialize, Queryable};

/// A promotional offer valid for one calendar month (`month` is `YYYY-MM`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlySpecial {
    #[serde(alias = "_id")]
    pub id: EntityKey,
    pub title: String,
    pub description: String,
    pub month: String,
    pub discount_percent: u8,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewMonthlySpecial {
    pub title: String,
    pub description: String,
    pub month: String,
    pub discount_percent: u8,
}

impl NewMonthlySpecial {
    #[must_use]
    pub fn new(title: String, description: String, month: MonthTag, discount_percent: u8) -> Self {
        Self {
            title: title.trim().to_string(),
            description: sanitize_html(&description),
            month: month.into_inner(),
            discount_percent,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateMonthlySpecial {
    pub title: Option<String>,
    pub description: Option<String>,
    pub month: Option<String>,
    pub discount_percent: Option<u8>,
    pub active: Option<bool>,
}

impl Keyed for MonthlySpecial {
    fn key(&self) -> &EntityKey {
        &self.id
    }
}

impl Queryable for MonthlySpecial {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn filter_field(&self) -> Option<&str> {
        Some(&self.month)
    }
}

impl Materialize for MonthlySpecial {
    type Create = NewMonthlySpecial;
    type Update = UpdateMonthlySpecial;

    fn materialize(key: EntityKey, payload: &NewMonthlySpecial) -> Self {
        Self {
            id: key,
            title: payload.title.clone(),
            description: payload.description.clone(),
            month: payload.month.clone(),
            discount_percent: payload.discount_percent,
            active: true,
        }
    }

    fn merge(&mut self, updates: &UpdateMonthlySpecial) {
        if let Some(title) = &updates.title {
            self.title = title.clone();
        }
        if let Some(description) = &updates.description {
            self.description = description.clone();
        }
        if let Some(month) = &updates.month {
            self.month = month.clone();
        }
        if let Some(discount_percent) = updates.discount_percent {
            self.discount_percent = discount_percent;
        }
        if let Some(active) = updates.active {
            self.active = active;
        }
    }
}
