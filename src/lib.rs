use std::sync::Arc;

use axum::extract::FromRef;
use configuration::SiteSettings;
use subscription_client::SubscriptionService;

pub mod configuration;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod subscribe_form;
pub mod subscription_client;
pub mod telemetry;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub subscription_service: Arc<dyn SubscriptionService>,
    pub site: Arc<SiteSettings>,
    pub success_redirect_path: Arc<str>,
    pub flash_config: axum_flash::Config,
}

impl FromRef<AppState> for axum_flash::Config {
    fn from_ref(state: &AppState) -> Self {
        state.flash_config.clone()
    }
}
