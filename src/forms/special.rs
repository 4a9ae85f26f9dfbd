use serde::Deserialize;
use validator::Validate;

use crate::controller::ControllerError;
use crate::domain::special::{MonthlySpecial, NewMonthlySpecial, UpdateMonthlySpecial};
use crate::domain::types::{MONTH_TAG_RE, MonthTag};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for creating or editing a monthly special.
pub struct SpecialForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(regex(path = *MONTH_TAG_RE, message = "month must look like 2026-08"))]
    pub month: String,
    #[validate(range(min = 1, max = 100, message = "discount must be between 1 and 100"))]
    pub discount_percent: u8,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl SpecialForm {
    #[must_use]
    pub fn for_edit(special: Option<&MonthlySpecial>) -> Self {
        match special {
            Some(special) => Self {
                title: special.title.clone(),
                description: special.description.clone(),
                month: special.month.clone(),
                discount_percent: special.discount_percent,
                active: special.active,
            },
            None => Self {
                active: true,
                ..Self::default()
            },
        }
    }

    pub fn to_new(&self) -> Result<NewMonthlySpecial, ControllerError> {
        Ok(NewMonthlySpecial::new(
            self.title.clone(),
            self.description.clone(),
            MonthTag::new(self.month.as_str())?,
            self.discount_percent,
        ))
    }

    pub fn to_update(&self) -> Result<UpdateMonthlySpecial, ControllerError> {
        let new = self.to_new()?;
        Ok(UpdateMonthlySpecial {
            title: Some(new.title),
            description: Some(new.description),
            month: Some(new.month),
            discount_percent: Some(new.discount_percent),
            active: Some(self.active),
        })
    }
}
