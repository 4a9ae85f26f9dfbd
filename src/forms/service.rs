use serde::Deserialize;
use validator::Validate;

use crate::domain::service::{NewSpaService, SpaService, UpdateSpaService};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for creating or editing a bookable treatment.
pub struct ServiceForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration_minutes: u32,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price_cents: i64,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ServiceForm {
    #[must_use]
    pub fn for_edit(service: Option<&SpaService>) -> Self {
        match service {
            Some(service) => Self {
                name: service.name.clone(),
                description: service.description.clone(),
                duration_minutes: service.duration_minutes,
                price_cents: service.price_cents,
                category: service.category.clone(),
                active: service.active,
            },
            None => Self {
                active: true,
                ..Self::default()
            },
        }
    }
}

impl From<&ServiceForm> for NewSpaService {
    fn from(form: &ServiceForm) -> Self {
        NewSpaService::new(
            form.name.clone(),
            form.description.clone(),
            form.duration_minutes,
            form.price_cents,
            form.category.clone(),
        )
    }
}

impl From<&ServiceForm> for UpdateSpaService {
    fn from(form: &ServiceForm) -> Self {
        let new = NewSpaService::from(form);
        UpdateSpaService {
            name: Some(new.name),
            description: Some(new.description),
            duration_minutes: Some(new.duration_minutes),
            price_cents: Some(new.price_cents),
            category: Some(new.category),
            active: Some(form.active),
        }
    }
}
