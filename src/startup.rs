use std::sync::Arc;

use anyhow::Context;
use axum::body::Body;
use axum::http::Request;
use axum::response::Redirect;
use axum::routing::{get, MethodRouter};
use axum::Router;
use axum_flash::Key;
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::configuration::Settings;
use crate::domain::SuccessPath;
use crate::routes::{health_check, subscribe, subscribe_form, thanks, SUBSCRIBE_PATH};
use crate::subscription_client::MailchimpClient;
use crate::AppState;

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        let success_path = SuccessPath::parse(
            &configuration.form.success_redirect_path,
            &[SUBSCRIBE_PATH, HEALTH_CHECK_PATH],
        )
        .map_err(|e| anyhow::anyhow!("Invalid form.success_redirect_path: {e}"))?;

        let subscription_client = MailchimpClient::new(&configuration.mailchimp)
            .context("Failed to build the Mailchimp client")?;

        let secret = configuration.application.hmac_secret.expose_secret().as_bytes();
        anyhow::ensure!(
            secret.len() >= 64,
            "The hmac secret must be at least 64 bytes long"
        );
        let key = Key::from(secret);
        let flash_config =
            axum_flash::Config::new(key).use_secure_cookies(configuration.application.secure_cookies);

        let app_state = AppState {
            subscription_service: Arc::new(subscription_client),
            site: Arc::new(configuration.site),
            success_redirect_path: success_path.as_ref().into(),
            flash_config,
        };

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();

        let router = router(app_state, &success_path);
        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}

const HEALTH_CHECK_PATH: &str = "/health_check";

fn redirect_to(target: String) -> MethodRouter<AppState> {
    get(move || {
        let target = target.clone();
        async move { Redirect::permanent(&target) }
    })
}

fn router(app_state: AppState, success_path: &SuccessPath) -> Router {
    let tracing_layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id());

    Router::new()
        .route(HEALTH_CHECK_PATH, get(health_check))
        .route(SUBSCRIBE_PATH, get(subscribe_form).post(subscribe))
        .route(&format!("{SUBSCRIBE_PATH}/"), redirect_to(SUBSCRIBE_PATH.into()))
        .route(success_path.as_ref(), get(thanks))
        .route(
            &success_path.slash_twin(),
            redirect_to(success_path.as_ref().into()),
        )
        .layer(tracing_layers)
        .with_state(app_state)
}
