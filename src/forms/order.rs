//! Orders are created by the storefront, not the back office; the only form
//! here drives the status change on the order detail screen.

use serde::Deserialize;
use validator::Validate;

use crate::controller::ControllerError;
use crate::domain::order::{OrderStatus, UpdateOrder};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderStatusForm {
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

impl OrderStatusForm {
    /// Parses the requested status and checks it against the transition
    /// table before any network call is made.
    pub fn to_update(&self, current: OrderStatus) -> Result<UpdateOrder, ControllerError> {
        let next: OrderStatus = self
            .status
            .parse()
            .map_err(|err| ControllerError::Form(format!("{err}")))?;
        if !current.can_transition(next) {
            return Err(ControllerError::Form(format!(
                "order cannot move from {current} to {next}"
            )));
        }
        Ok(UpdateOrder { status: Some(next) })
    }
}
