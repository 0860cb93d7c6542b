use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder, Url};
use validator::validate_email;

use crate::configuration::MailchimpSettings;
use crate::domain::ServiceResponse;
use crate::utils::error_chain_fmt;

pub const INVALID_EMAIL_MESSAGE: &str = "The email you entered is not valid.";

/// Extra merge fields sent along with the address, e.g. `FNAME`.
pub type ListFields = BTreeMap<String, String>;

#[derive(thiserror::Error)]
pub enum SubscriptionError {
    #[error("Failed to reach the subscription service")]
    Transport(#[from] reqwest::Error),
    #[error("The subscription service replied with an unreadable body")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("{0} is not a usable subscription endpoint")]
    InvalidEndpoint(String),
}

impl std::fmt::Debug for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// A hosted mailing list that accepts an email address.
///
/// `Ok` means the service answered, whatever it said; `Err` means no
/// answer could be obtained.
#[async_trait]
pub trait SubscriptionService: Send + Sync {
    async fn subscribe(&self, email: &str) -> Result<ServiceResponse, SubscriptionError>;
}

pub struct MailchimpClient {
    http_client: Client,
    url: Url,
    list_fields: ListFields,
}

impl MailchimpClient {
    pub fn new(config: &MailchimpSettings) -> Result<Self, SubscriptionError> {
        let url = json_endpoint(&config.endpoint)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_millis))
            .build()?;

        Ok(Self {
            http_client,
            url,
            list_fields: ListFields::new(),
        })
    }

    /// Merge fields sent with every subscription from this client.
    pub fn with_list_fields(mut self, list_fields: ListFields) -> Self {
        self.list_fields = list_fields;
        self
    }

    #[tracing::instrument(name = "Subscribing email to Mailchimp", skip(self, fields))]
    pub async fn subscribe_with_fields(
        &self,
        email: &str,
        fields: &ListFields,
    ) -> Result<ServiceResponse, SubscriptionError> {
        if !validate_email(email) {
            tracing::info!("Rejected an invalid email before contacting Mailchimp");
            return Ok(ServiceResponse::error(INVALID_EMAIL_MESSAGE));
        }

        let mut url = self.url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("EMAIL", email);
            for (name, value) in self.list_fields.iter().chain(fields) {
                query.append_pair(&field_key(name), value);
            }
        }

        let body = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: ServiceResponse = serde_json::from_str(strip_jsonp_padding(&body))
            .map_err(SubscriptionError::MalformedResponse)?;
        tracing::info!(result = ?response.result, "Mailchimp answered");
        Ok(response)
    }
}

#[async_trait]
impl SubscriptionService for MailchimpClient {
    async fn subscribe(&self, email: &str) -> Result<ServiceResponse, SubscriptionError> {
        self.subscribe_with_fields(email, &ListFields::new()).await
    }
}

/// The embedded form posts to `/subscribe/post`; the same list answers
/// with JSON on `/subscribe/post-json`.
fn json_endpoint(endpoint: &str) -> Result<Url, SubscriptionError> {
    let mut url =
        Url::parse(endpoint).map_err(|_| SubscriptionError::InvalidEndpoint(endpoint.into()))?;
    if url.cannot_be_a_base() {
        return Err(SubscriptionError::InvalidEndpoint(endpoint.into()));
    }
    let path = url.path().replace("/post", "/post-json");
    url.set_path(&path);
    Ok(url)
}

fn field_key(name: &str) -> String {
    if name.starts_with("group[") {
        name.to_string()
    } else {
        name.to_uppercase()
    }
}

/// `cb({...})` -> `{...}`; plain JSON is returned as is.
fn strip_jsonp_padding(body: &str) -> &str {
    let trimmed = body.trim().trim_end_matches(';');
    match (trimmed.find('('), trimmed.strip_suffix(')')) {
        (Some(open), Some(inner)) if !trimmed.starts_with('{') => &inner[open + 1..],
        _ => trimmed,
    }
}
