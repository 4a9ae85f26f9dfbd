//! Back-office user accounts.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::types::{EntityKey, TypeConstraintError, normalize_phone_to_e164};
use crate::domain::{Keyed, Materialize, Queryable};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    #[default]
    Customer,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Staff, UserRole::Customer];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Customer => "customer",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "staff" => Ok(UserRole::Staff),
            "customer" => Ok(UserRole::Customer),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown user role: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: EntityKey,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl NewUser {
    /// Lowercases the email and normalizes the phone to E.164 where it
    /// parses; unparseable phones are dropped rather than stored raw.
    #[must_use]
    pub fn new(name: String, email: String, phone: Option<String>, role: UserRole) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.and_then(|p| normalize_phone_to_e164(&p).ok()),
            role,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
}

impl Keyed for User {
    fn key(&self) -> &EntityKey {
        &self.id
    }
}

impl Queryable for User {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn filter_field(&self) -> Option<&str> {
        Some(self.role.as_str())
    }
}

impl Materialize for User {
    type Create = NewUser;
    type Update = UpdateUser;

    fn materialize(key: EntityKey, payload: &NewUser) -> Self {
        Self {
            id: key,
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            role: payload.role,
            created_at: Utc::now().naive_utc(),
        }
    }

    fn merge(&mut self, updates: &UpdateUser) {
        if let Some(name) = &updates.name {
            self.name = name.clone();
        }
        if let Some(email) = &updates.email {
            self.email = email.trim().to_lowercase();
        }
        if let Some(phone) = &updates.phone {
            self.phone = normalize_phone_to_e164(phone).ok();
        }
        if let Some(role) = updates.role {
            self.role = role;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_normalizes_contact_details() {
        let user = NewUser::new(
            "  Mara Voss ".into(),
            "Mara.Voss@Example.COM".into(),
            Some("+1 (415) 555-2671".into()),
            UserRole::Staff,
        );
        assert_eq!(user.name, "Mara Voss");
        assert_eq!(user.email, "mara.voss@example.com");
        assert_eq!(user.phone.as_deref(), Some("+14155552671"));
    }

    #[test]
    fn unparseable_phone_is_dropped() {
        let user = NewUser::new("X".into(), "x@example.com".into(), Some("nope".into()), UserRole::Customer);
        assert_eq!(user.phone, None);
    }
}
