//! Error conversion glue between layers.
//!
//! The domain layer must not depend on controller/gateway error types, so
//! the conversions live here instead of next to the types they convert.

use validator::ValidationErrors;

use crate::controller::ControllerError;
use crate::domain::types::TypeConstraintError;
use crate::forms::validation_message;
use crate::gateway::GatewayError;

impl From<TypeConstraintError> for ControllerError {
    fn from(val: TypeConstraintError) -> Self {
        ControllerError::Form(val.to_string())
    }
}

impl From<TypeConstraintError> for GatewayError {
    fn from(val: TypeConstraintError) -> Self {
        GatewayError::ValidationError(val.to_string())
    }
}

impl From<ValidationErrors> for ControllerError {
    fn from(val: ValidationErrors) -> Self {
        ControllerError::Form(validation_message(&val))
    }
}
