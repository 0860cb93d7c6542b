mod service_response;
mod site_url;
mod status_message;
mod success_path;

pub use service_response::{ResponseStatus, ServiceResponse};
pub use site_url::SiteUrl;
pub use status_message::{StatusMessage, PROFILE_BOILERPLATE};
pub use success_path::SuccessPath;
