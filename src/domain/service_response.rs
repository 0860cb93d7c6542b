use serde::Deserialize;

/// Status discriminator of a subscription reply. Only the literal `error`
/// marks a failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ResponseStatus {
    Error,
    Success(String),
}

impl From<String> for ResponseStatus {
    fn from(value: String) -> Self {
        if value == "error" {
            Self::Error
        } else {
            Self::Success(value)
        }
    }
}

impl ResponseStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Reply of the subscription service, e.g.
/// `{"result": "success", "msg": "Thank you for subscribing!"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceResponse {
    pub result: ResponseStatus,
    #[serde(default)]
    pub msg: String,
}

impl ServiceResponse {
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            result: ResponseStatus::Error,
            msg: msg.into(),
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            result: ResponseStatus::Success("success".into()),
            msg: msg.into(),
        }
    }
}
