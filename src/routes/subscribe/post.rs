use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_flash::Flash;
use serde::Deserialize;

use super::SUBSCRIBE_PATH;
use crate::subscribe_form::attempt_subscription;
use crate::AppState;

#[derive(Deserialize)]
pub struct FormData {
    pub email: String,
}

/// Full-page fallback for the signup form, used when nothing intercepts
/// the submit event in the browser.
#[tracing::instrument(
    name = "Handling signup form post",
    skip(state, flash, form),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe(
    state: State<AppState>,
    flash: Flash,
    form: Form<FormData>,
) -> Response {
    let outcome = attempt_subscription(state.subscription_service.as_ref(), &form.email).await;
    if outcome.is_success() {
        let flash = flash.success(outcome.message().as_ref());
        (flash, Redirect::to(&state.success_redirect_path)).into_response()
    } else {
        let flash = flash.error(outcome.message().as_ref());
        (flash, Redirect::to(SUBSCRIBE_PATH)).into_response()
    }
}
