use serde::Deserialize;
use validator::Validate;

use crate::controller::ControllerError;
use crate::domain::gift_card::{GiftCard, GiftCardStatus, NewGiftCard, UpdateGiftCard};
use crate::domain::types::{GIFT_CARD_CODE_RE, GiftCardCode};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for creating or editing a gift card.
pub struct GiftCardForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Redemption code, e.g. `AMZ-100`.
    #[validate(regex(path = *GIFT_CARD_CODE_RE, message = "code must look like AMZ-100"))]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount_cents: i64,
    /// `YYYY-MM-DD`, optional.
    pub expires_at: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub status: Option<GiftCardStatus>,
}

impl GiftCardForm {
    #[must_use]
    pub fn for_edit(card: Option<&GiftCard>) -> Self {
        match card {
            Some(card) => Self {
                name: card.name.clone(),
                code: card.code.clone(),
                description: card.description.clone(),
                amount_cents: card.amount_cents,
                expires_at: card.expires_at,
                status: Some(card.status),
            },
            None => Self::default(),
        }
    }

    pub fn to_new(&self) -> Result<NewGiftCard, ControllerError> {
        Ok(NewGiftCard::new(
            self.name.clone(),
            GiftCardCode::new(self.code.as_str())?,
            self.description.clone(),
            self.amount_cents,
            self.expires_at,
        ))
    }
}

impl From<&GiftCardForm> for UpdateGiftCard {
    fn from(form: &GiftCardForm) -> Self {
        UpdateGiftCard {
            name: Some(form.name.trim().to_string()),
            description: Some(form.description.trim().to_string()),
            amount_cents: Some(form.amount_cents),
            status: form.status,
            expires_at: form.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> GiftCardForm {
        GiftCardForm {
            name: "Amazon Gift Card".into(),
            code: "AMZ-100".into(),
            description: "Redeemable online".into(),
            amount_cents: 10_000,
            expires_at: None,
            status: None,
        }
    }

    #[test]
    fn accepts_well_formed_codes() {
        assert!(valid_form().validate().is_ok());
        let mut form = valid_form();
        form.code = "ITN-50".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["amz-100", "AMZ100", "TOOLONGCODE-1", "AMZ-"] {
            let mut form = valid_form();
            form.code = code.into();
            assert!(form.validate().is_err(), "code {code:?} should be rejected");
        }
    }
}
