use askama_axum::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_flash::IncomingFlashes;

use super::SUBSCRIBE_PATH;
use crate::utils::{e500, read_flash_messages};
use crate::AppState;

#[derive(Template)]
#[template(path = "subscribe.html")]
struct SubscribePage {
    site_title: String,
    canonical_url: String,
    form_action: &'static str,
    msg: String,
}

pub async fn subscribe_form(
    State(state): State<AppState>,
    flash_messages: IncomingFlashes,
) -> Result<Response, StatusCode> {
    let canonical_url = state
        .site
        .site_url
        .canonical(SUBSCRIBE_PATH)
        .map_err(e500)?;
    let page = SubscribePage {
        site_title: state.site.title.clone(),
        canonical_url: canonical_url.to_string(),
        form_action: SUBSCRIBE_PATH,
        msg: read_flash_messages(&flash_messages),
    };
    Ok((flash_messages, page).into_response())
}
