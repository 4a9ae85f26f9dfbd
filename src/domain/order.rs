//! Customer orders and the status lifecycle they move through.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::types::{EntityKey, TypeConstraintError, normalize_email};
use crate::domain::{Keyed, Materialize, Queryable};

/// Lifecycle state of an order.
///
/// Transitions are restricted: see [`OrderStatus::can_transition`]. `Delivered`
/// and `Cancelled` are terminal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses an order in this state may move to.
    pub fn next_statuses(self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Processing, OrderStatus::Cancelled],
            OrderStatus::Processing => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition(self, next: OrderStatus) -> bool {
        self.next_statuses().contains(&next)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown order status: {other}"
            ))),
        }
    }
}

/// One purchased line of an order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

impl OrderItem {
    pub fn subtotal_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: EntityKey,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
}

impl NewOrder {
    /// Normalizes customer contact data; the email is validated upstream by
    /// the form layer, so a malformed value here is passed through untouched.
    #[must_use]
    pub fn new(customer_name: String, customer_email: String, items: Vec<OrderItem>) -> Self {
        Self {
            customer_name: customer_name.trim().to_string(),
            customer_email: normalize_email(&customer_email)
                .unwrap_or_else(|_| customer_email.trim().to_string()),
            items,
        }
    }

    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(OrderItem::subtotal_cents).sum()
    }
}

/// Partial update for an order. Admin screens only ever change the status.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateOrder {
    pub status: Option<OrderStatus>,
}

impl Keyed for Order {
    fn key(&self) -> &EntityKey {
        &self.id
    }
}

impl Queryable for Order {
    fn haystack(&self) -> Vec<&str> {
        vec![&self.order_number, &self.customer_name, &self.customer_email]
    }

    fn filter_field(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Materialize for Order {
    type Create = NewOrder;
    type Update = UpdateOrder;

    fn materialize(key: EntityKey, payload: &NewOrder) -> Self {
        let now = Utc::now().naive_utc();
        let suffix: String = key.as_str().chars().take(8).collect();
        Self {
            order_number: format!("ORD-{}", suffix.to_uppercase()),
            customer_name: payload.customer_name.clone(),
            customer_email: payload.customer_email.clone(),
            total_cents: payload.total_cents(),
            items: payload.items.clone(),
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
            id: key,
        }
    }

    fn merge(&mut self, updates: &UpdateOrder) {
        if let Some(status) = updates.status {
            self.status = status;
            self.updated_at = Utc::now().naive_utc();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(OrderStatus::Pending.can_transition(OrderStatus::Processing));
        assert!(OrderStatus::Pending.can_transition(OrderStatus::Cancelled));
        assert!(OrderStatus::Processing.can_transition(OrderStatus::Shipped));
        assert!(OrderStatus::Processing.can_transition(OrderStatus::Cancelled));
        assert!(OrderStatus::Shipped.can_transition(OrderStatus::Delivered));
    }

    #[test]
    fn terminal_and_backward_transitions_are_rejected() {
        for status in OrderStatus::ALL {
            assert!(!OrderStatus::Delivered.can_transition(status));
            assert!(!OrderStatus::Cancelled.can_transition(status));
        }
        assert!(!OrderStatus::Shipped.can_transition(OrderStatus::Pending));
        assert!(!OrderStatus::Shipped.can_transition(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition(OrderStatus::Delivered));
    }

    #[test]
    fn totals_sum_line_subtotals() {
        let order = NewOrder::new(
            "Dana".into(),
            "Dana@Example.com ".into(),
            vec![
                OrderItem {
                    product_id: "p1".into(),
                    name: "Lavender oil".into(),
                    quantity: 2,
                    unit_price_cents: 1250,
                },
                OrderItem {
                    product_id: "p2".into(),
                    name: "Bath salts".into(),
                    quantity: 1,
                    unit_price_cents: 800,
                },
            ],
        );
        assert_eq!(order.total_cents(), 3300);
        assert_eq!(order.customer_email, "dana@example.com");
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("unknown".parse::<OrderStatus>().is_err());
    }
}
