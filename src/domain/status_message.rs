use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Link text Mailchimp appends to "already subscribed" replies.
pub const PROFILE_BOILERPLATE: &str = "Click here to update your profile";

static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>?").expect("markup pattern is valid"));

/// A service message that is safe to show next to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage(String);

impl StatusMessage {
    pub fn sanitize(raw: &str) -> Self {
        let mut message = MARKUP.replace_all(raw, "").into_owned();
        // Removing one occurrence can splice its neighbours into another.
        while message.contains(PROFILE_BOILERPLATE) {
            message = message.replace(PROFILE_BOILERPLATE, "");
        }
        Self(message)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for StatusMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
