use serde::Deserialize;
use validator::Validate;

use crate::domain::policy::{BookingPolicy, NewBookingPolicy, UpdateBookingPolicy};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for creating or editing a booking policy. The body arrives from
/// the rich-text widget and is sanitized on conversion.
pub struct PolicyForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
    #[serde(default)]
    pub position: u32,
}

impl PolicyForm {
    #[must_use]
    pub fn for_edit(policy: Option<&BookingPolicy>) -> Self {
        match policy {
            Some(policy) => Self {
                title: policy.title.clone(),
                body: policy.body.clone(),
                position: policy.position,
            },
            None => Self::default(),
        }
    }
}

impl From<&PolicyForm> for NewBookingPolicy {
    fn from(form: &PolicyForm) -> Self {
        NewBookingPolicy::new(form.title.clone(), form.body.clone(), form.position)
    }
}

impl From<&PolicyForm> for UpdateBookingPolicy {
    fn from(form: &PolicyForm) -> Self {
        UpdateBookingPolicy::new(
            Some(form.title.clone()),
            Some(form.body.clone()),
            Some(form.position),
        )
    }
}
