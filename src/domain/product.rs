use serde::{Deserialize, Serialize};

use crate::domain::types::EntityKey;
use crate::domain::{Keyed, Materialize, Queryable};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: EntityKey,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    pub stock: u32,
    pub image_url: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    pub stock: u32,
    pub image_url: Option<String>,
}

impl NewProduct {
    #[must_use]
    pub fn new(
        name: String,
        description: String,
        price_cents: i64,
        category: String,
        stock: u32,
        image_url: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            price_cents,
            category: category.trim().to_lowercase(),
            stock,
            image_url: image_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}

impl Keyed for Product {
    fn key(&self) -> &EntityKey {
        &self.id
    }
}

impl Queryable for Product {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.category]
    }

    fn filter_field(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Materialize for Product {
    type Create = NewProduct;
    type Update = UpdateProduct;

    fn materialize(key: EntityKey, payload: &NewProduct) -> Self {
        Self {
            id: key,
            name: payload.name.clone(),
            description: payload.description.clone(),
            price_cents: payload.price_cents,
            category: payload.category.clone(),
            stock: payload.stock,
            image_url: payload.image_url.clone(),
            active: true,
        }
    }

    fn merge(&mut self, updates: &UpdateProduct) {
        if let Some(name) = &updates.name {
            self.name = name.clone();
        }
        if let Some(description) = &updates.description {
            self.description = description.clone();
        }
        if let Some(price_cents) = updates.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(category) = &updates.category {
            self.category = category.clone();
        }
        if let Some(stock) = updates.stock {
            self.stock = stock;
        }
        if let Some(image_url) = &updates.image_url {
            self.image_url = Some(image_url.clone());
        }
        if let Some(active) = updates.active {
            self.active = active;
        }
    }
}
