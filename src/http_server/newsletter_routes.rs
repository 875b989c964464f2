//! Newsletter HTTP Routes
//!
//! `POST /newsletter/subscribe` records a signup once per email address.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::submissions::{
    field_text, is_present, is_valid_email_value, NewNewsletterSubscriber, SubmissionStore,
    Subscription,
};

use super::body::parse_form;
use super::contact_routes::INVALID_EMAIL;
use super::errors::{ApiError, ApiResult, MessageResponse};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const ALREADY_SUBSCRIBED: &str = "You're already subscribed to the newsletter";
pub const SUBSCRIBED: &str = "Successfully subscribed to the newsletter";
pub const SUBSCRIBE_FAILED: &str = "Failed to subscribe. Please try again later.";

/// Newsletter routes with a shared store
pub fn newsletter_routes(store: Arc<dyn SubmissionStore>) -> Router {
    Router::new()
        .route("/newsletter/subscribe", post(subscribe_handler))
        .with_state(store)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<Value>,
}

impl SubscribeRequest {
    pub fn into_new_subscriber(self) -> ApiResult<NewNewsletterSubscriber> {
        let email = match self.email {
            Some(email) if is_present(&email) => email,
            _ => return Err(ApiError::validation(EMAIL_REQUIRED)),
        };

        if !is_valid_email_value(&email) {
            return Err(ApiError::validation(INVALID_EMAIL));
        }

        Ok(NewNewsletterSubscriber::now(field_text(email)))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCreatedResponse {
    pub message: String,
    pub subscription_id: u64,
}

// ==================
// Handlers
// ==================

/// 201 for a new signup, 200 when the address is already on the list
async fn subscribe_handler(
    State(store): State<Arc<dyn SubmissionStore>>,
    body: Bytes,
) -> ApiResult<Response> {
    let request: SubscribeRequest = parse_form(&body)?;
    let subscriber = request.into_new_subscriber()?;

    let outcome = store
        .subscribe_newsletter(subscriber)
        .map_err(|e| ApiError::internal(SUBSCRIBE_FAILED, e))?;

    let response = match outcome {
        Subscription::Created(subscriber) => {
            tracing::info!(subscription_id = subscriber.id, "newsletter subscriber stored");
            (
                StatusCode::CREATED,
                Json(SubscriptionCreatedResponse {
                    message: SUBSCRIBED.to_string(),
                    subscription_id: subscriber.id,
                }),
            )
                .into_response()
        }
        Subscription::Existing(subscriber) => {
            tracing::debug!(subscription_id = subscriber.id, "duplicate newsletter signup");
            (StatusCode::OK, Json(MessageResponse::new(ALREADY_SUBSCRIBED))).into_response()
        }
    };

    Ok(response)
}
