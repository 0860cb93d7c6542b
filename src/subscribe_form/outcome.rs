use crate::domain::{ServiceResponse, StatusMessage};
use crate::subscription_client::SubscriptionService;

/// Shown when the mailing list could not be reached at all.
pub const TRY_AGAIN_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionOutcome {
    success: bool,
    message: StatusMessage,
}

impl SubscriptionOutcome {
    pub fn transport_failure() -> Self {
        Self {
            success: false,
            message: StatusMessage::sanitize(TRY_AGAIN_MESSAGE),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    pub fn into_message(self) -> StatusMessage {
        self.message
    }
}

impl From<ServiceResponse> for SubscriptionOutcome {
    fn from(response: ServiceResponse) -> Self {
        Self {
            success: !response.result.is_error(),
            message: StatusMessage::sanitize(&response.msg),
        }
    }
}

/// Submits `email` and reduces whatever happens to an outcome.
#[tracing::instrument(name = "Attempting subscription", skip(service))]
pub async fn attempt_subscription(
    service: &dyn SubscriptionService,
    email: &str,
) -> SubscriptionOutcome {
    match service.subscribe(email).await {
        Ok(response) => SubscriptionOutcome::from(response),
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, "Subscription service could not be reached");
            SubscriptionOutcome::transport_failure()
        }
    }
}
