use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, Product, UpdateProduct};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for creating or editing a product.
pub struct ProductForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price_cents: i64,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[validate(url(message = "invalid image url"))]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ProductForm {
    /// Builds the edit form for a product, or a blank form when the record
    /// no longer exists in the fetched page.
    #[must_use]
    pub fn for_edit(product: Option<&Product>) -> Self {
        match product {
            Some(product) => Self {
                name: product.name.clone(),
                description: product.description.clone(),
                price_cents: product.price_cents,
                category: product.category.clone(),
                stock: product.stock,
                image_url: product.image_url.clone(),
                active: product.active,
            },
            None => Self {
                active: true,
                ..Self::default()
            },
        }
    }
}

impl From<&ProductForm> for NewProduct {
    fn from(form: &ProductForm) -> Self {
        NewProduct::new(
            form.name.clone(),
            form.description.clone(),
            form.price_cents,
            form.category.clone(),
            form.stock,
            form.image_url.clone(),
        )
    }
}

impl From<&ProductForm> for UpdateProduct {
    fn from(form: &ProductForm) -> Self {
        let new = NewProduct::from(form);
        UpdateProduct {
            name: Some(new.name),
            description: Some(new.description),
            price_cents: Some(new.price_cents),
            category: Some(new.category),
            stock: Some(new.stock),
            image_url: new.image_url,
            active: Some(form.active),
        }
    }
}
