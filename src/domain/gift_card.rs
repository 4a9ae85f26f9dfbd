//! Prepaid gift cards sold alongside products and services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::types::{EntityKey, GiftCardCode, TypeConstraintError};
use crate::domain::{Keyed, Materialize, Queryable};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GiftCardStatus {
    #[default]
    Active,
    Redeemed,
    Expired,
}

impl GiftCardStatus {
    pub const ALL: [GiftCardStatus; 3] = [
        GiftCardStatus::Active,
        GiftCardStatus::Redeemed,
        GiftCardStatus::Expired,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GiftCardStatus::Active => "active",
            GiftCardStatus::Redeemed => "redeemed",
            GiftCardStatus::Expired => "expired",
        }
    }
}

impl Display for GiftCardStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GiftCardStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(GiftCardStatus::Active),
            "redeemed" => Ok(GiftCardStatus::Redeemed),
            "expired" => Ok(GiftCardStatus::Expired),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown gift card status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GiftCard {
    #[serde(alias = "_id")]
    pub id: EntityKey,
    pub name: String,
    /// Redemption code, e.g. `AMZ-100`. Unique per collection, uppercase.
    pub code: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: GiftCardStatus,
    pub expires_at: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewGiftCard {
    pub name: String,
    pub code: String,
    pub description: String,
    pub amount_cents: i64,
    pub expires_at: Option<NaiveDate>,
}

impl NewGiftCard {
    /// Taking a [`GiftCardCode`] keeps malformed codes out of the payload;
    /// the code is fixed at creation and never part of an update.
    #[must_use]
    pub fn new(
        name: String,
        code: GiftCardCode,
        description: String,
        amount_cents: i64,
        expires_at: Option<NaiveDate>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            code: code.into_inner(),
            description: description.trim().to_string(),
            amount_cents,
            expires_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateGiftCard {
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount_cents: Option<i64>,
    pub status: Option<GiftCardStatus>,
    pub expires_at: Option<NaiveDate>,
}

impl Keyed for GiftCard {
    fn key(&self) -> &EntityKey {
        &self.id
    }
}

impl Queryable for GiftCard {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.code, &self.description]
    }

    fn filter_field(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Materialize for GiftCard {
    type Create = NewGiftCard;
    type Update = UpdateGiftCard;

    fn materialize(key: EntityKey, payload: &NewGiftCard) -> Self {
        Self {
            id: key,
            name: payload.name.clone(),
            code: payload.code.clone(),
            description: payload.description.clone(),
            amount_cents: payload.amount_cents,
            status: GiftCardStatus::Active,
            expires_at: payload.expires_at,
        }
    }

    fn merge(&mut self, updates: &UpdateGiftCard) {
        if let Some(name) = &updates.name {
            self.name = name.clone();
        }
        if let Some(description) = &updates.description {
            self.description = description.clone();
        }
        if let Some(amount_cents) = updates.amount_cents {
            self.amount_cents = amount_cents;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(expires_at) = updates.expires_at {
            self.expires_at = Some(expires_at);
        }
    }
}
