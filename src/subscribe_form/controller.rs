use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tracing::Instrument;

use super::navigation::Navigator;
use super::outcome::attempt_subscription;
use crate::subscription_client::SubscriptionService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    /// At least one submission is waiting for the mailing list.
    Submitting,
}

/// The form's submit event. Left alone it would trigger a full-page post.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A submission in flight. Dropping it does not cancel anything.
pub struct Submission(JoinHandle<()>);

impl Submission {
    /// Resolves once the reply has been applied to the form.
    pub async fn wait(self) -> Result<(), JoinError> {
        self.0.await
    }
}

struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Signup form state and its submit handler.
///
/// Every submission runs as its own task on the current tokio runtime.
/// Overlapping submissions are not fenced: the reply that lands last
/// decides the displayed result.
pub struct SubscribeForm {
    service: Arc<dyn SubscriptionService>,
    navigator: Arc<dyn Navigator>,
    success_redirect_path: Arc<str>,
    email: String,
    result: Arc<watch::Sender<String>>,
    in_flight: Arc<AtomicUsize>,
}

impl SubscribeForm {
    pub fn new(
        service: Arc<dyn SubscriptionService>,
        navigator: Arc<dyn Navigator>,
        success_redirect_path: impl Into<String>,
    ) -> Self {
        let (result, _) = watch::channel(String::new());
        let success_redirect_path: String = success_redirect_path.into();
        Self {
            service,
            navigator,
            success_redirect_path: Arc::from(success_redirect_path),
            email: String::new(),
            result: Arc::new(result),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn on_email_change(&mut self, new_value: impl Into<String>) {
        self.email = new_value.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Must be called from within a tokio runtime.
    pub fn on_submit(&self, event: &mut SubmitEvent) -> Submission {
        event.prevent_default();

        let service = Arc::clone(&self.service);
        let navigator = Arc::clone(&self.navigator);
        let path = Arc::clone(&self.success_redirect_path);
        let result = Arc::clone(&self.result);
        let in_flight = InFlight::enter(&self.in_flight);
        let email = self.email.clone();
        let span = tracing::info_span!("Submitting signup form", subscriber_email = %email);

        let handle = tokio::spawn(
            async move {
                let outcome = attempt_subscription(service.as_ref(), &email).await;
                if outcome.is_success() {
                    tracing::info!(path = %path, "Subscribed, navigating away");
                    navigator.navigate(&path);
                }
                // Idle must be visible to whoever the new result wakes up.
                drop(in_flight);
                result.send_replace(outcome.into_message().into_inner());
            }
            .instrument(span),
        );
        Submission(handle)
    }

    /// The sanitized message of the latest reply, empty before the first.
    pub fn subscription_result(&self) -> String {
        self.result.borrow().clone()
    }

    /// Notified every time a reply overwrites the result.
    pub fn watch_result(&self) -> watch::Receiver<String> {
        self.result.subscribe()
    }

    pub fn state(&self) -> FormState {
        if self.in_flight.load(Ordering::SeqCst) == 0 {
            FormState::Idle
        } else {
            FormState::Submitting
        }
    }
}
