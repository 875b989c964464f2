//! Contact HTTP Routes
//!
//! `POST /contact` stores a contact-form message.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::submissions::{
    field_text, is_valid_email_value, require_fields, NewContactMessage, SubmissionStore,
};

use super::body::parse_form;
use super::errors::{ApiError, ApiResult};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const INVALID_EMAIL: &str = "Please provide a valid email address";
pub const CONTACT_SENT: &str = "Message sent successfully";
pub const CONTACT_FAILED: &str = "Failed to send message. Please try again later.";

/// Contact routes with a shared store
pub fn contact_routes(store: Arc<dyn SubmissionStore>) -> Router {
    Router::new()
        .route("/contact", post(submit_contact_handler))
        .with_state(store)
}

// ==================
// Request/Response Types
// ==================

/// Contact form payload; any field may be missing or of any JSON type
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub subject: Option<Value>,
    pub message: Option<Value>,
}

impl ContactRequest {
    /// Validate and turn into a store insert stamped with the current time
    pub fn into_new_message(self) -> ApiResult<NewContactMessage> {
        let present = require_fields(&[
            self.name.as_ref(),
            self.email.as_ref(),
            self.subject.as_ref(),
            self.message.as_ref(),
        ]);
        if !present {
            return Err(ApiError::validation(ALL_FIELDS_REQUIRED));
        }

        if !self.email.as_ref().is_some_and(is_valid_email_value) {
            return Err(ApiError::validation(INVALID_EMAIL));
        }

        Ok(NewContactMessage::now(
            field_text(self.name.unwrap_or_default()),
            field_text(self.email.unwrap_or_default()),
            field_text(self.subject.unwrap_or_default()),
            field_text(self.message.unwrap_or_default()),
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreatedResponse {
    pub message: String,
    pub contact_id: u64,
}

// ==================
// Handlers
// ==================

async fn submit_contact_handler(
    State(store): State<Arc<dyn SubmissionStore>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ContactCreatedResponse>)> {
    let request: ContactRequest = parse_form(&body)?;
    let message = request.into_new_message()?;

    let contact = store
        .create_contact_message(message)
        .map_err(|e| ApiError::internal(CONTACT_FAILED, e))?;

    tracing::info!(contact_id = contact.id, "contact message stored");

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            message: CONTACT_SENT.to_string(),
            contact_id: contact.id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, subject: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(Value::from(name)),
            email: Some(Value::from(email)),
            subject: Some(Value::from(subject)),
            message: Some(Value::from(message)),
        }
    }

    fn validation_text(result: ApiResult<NewContactMessage>) -> String {
        match result {
            Err(ApiError::Validation(text)) => text,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request() {
        let msg = request("Jane", "jane@example.com", "Hello", "Hi there")
            .into_new_message()
            .unwrap();
        assert_eq!(msg.name, "Jane");
        assert_eq!(msg.email, "jane@example.com");
        assert!(msg.created_at.is_some());
    }

    #[test]
    fn test_missing_or_empty_field() {
        let mut req = request("Jane", "jane@example.com", "Hello", "Hi");
        req.subject = None;
        assert_eq!(validation_text(req.into_new_message()), ALL_FIELDS_REQUIRED);

        let req = request("", "jane@example.com", "Hello", "Hi");
        assert_eq!(validation_text(req.into_new_message()), ALL_FIELDS_REQUIRED);

        assert_eq!(
            validation_text(ContactRequest::default().into_new_message()),
            ALL_FIELDS_REQUIRED
        );
    }

    #[test]
    fn test_missing_fields_checked_before_email() {
        let req = request("", "not-an-email", "Hello", "Hi");
        assert_eq!(validation_text(req.into_new_message()), ALL_FIELDS_REQUIRED);
    }

    #[test]
    fn test_invalid_email() {
        let req = request("Jane", "not-an-email", "Hello", "Hi");
        assert_eq!(validation_text(req.into_new_message()), INVALID_EMAIL);
    }

    #[test]
    fn test_non_string_values() {
        let mut req = request("Jane", "jane@example.com", "Hello", "Hi");
        req.email = Some(Value::from(42));
        assert_eq!(validation_text(req.into_new_message()), INVALID_EMAIL);

        let mut req = request("Jane", "jane@example.com", "Hello", "Hi");
        req.name = Some(Value::from(0));
        assert_eq!(validation_text(req.into_new_message()), ALL_FIELDS_REQUIRED);

        let mut req = request("Jane", "jane@example.com", "Hello", "Hi");
        req.name = Some(Value::from(42));
        assert_eq!(req.into_new_message().unwrap().name, "42");
    }

    #[test]
    fn test_created_response_shape() {
        let body = ContactCreatedResponse {
            message: CONTACT_SENT.to_string(),
            contact_id: 1,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contactId"], 1);
        assert_eq!(json["message"], CONTACT_SENT);
    }
}
