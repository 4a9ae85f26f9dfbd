//! Form payloads for the create/edit screens.
//!
//! Forms are validated with the `validator` derive before any network call;
//! a failing form never reaches the gateway. Edit forms are built with
//! `for_edit`, which falls back to defaults when the record being edited no
//! longer exists in the fetched page.

use validator::ValidationErrors;

pub mod gallery;
pub mod gift_card;
pub mod order;
pub mod policy;
pub mod product;
pub mod service;
pub mod special;
pub mod user;

/// Flattens derive-produced validation errors into a single message suitable
/// for a transient notification.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let detail = errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "invalid value".to_string());
            format!("{field}: {detail}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
