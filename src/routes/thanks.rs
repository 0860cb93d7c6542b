use askama_axum::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_flash::IncomingFlashes;

use crate::utils::read_flash_messages;
use crate::AppState;

#[derive(Template)]
#[template(path = "thanks.html")]
struct ThanksPage {
    site_title: String,
    msg: String,
}

pub async fn thanks(State(state): State<AppState>, flash_messages: IncomingFlashes) -> Response {
    let page = ThanksPage {
        site_title: state.site.title.clone(),
        msg: read_flash_messages(&flash_messages),
    };
    (flash_messages, page).into_response()
}
