mod get;
mod post;

pub use get::subscribe_form;
pub use post::subscribe;

pub const SUBSCRIBE_PATH: &str = "/subscribe";
