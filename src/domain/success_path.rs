/// Page the signup form sends people to once Mailchimp accepted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessPath(String);

impl SuccessPath {
    /// `reserved` lists paths already routed elsewhere; a trailing slash
    /// does not make a path distinct.
    pub fn parse(path: &str, reserved: &[&str]) -> Result<Self, String> {
        if !path.starts_with('/') || path.starts_with("//") {
            return Err(format!("{path} is not an absolute path on this site."));
        }
        if path.contains(['?', '#', ':', '*', '{', '}']) || path.chars().any(char::is_whitespace) {
            return Err(format!("{path} must be a plain path."));
        }
        if trim_slash(path) == "/" {
            return Err("The site root cannot be the success page.".into());
        }
        if let Some(taken) = reserved.iter().find(|r| trim_slash(r) == trim_slash(path)) {
            return Err(format!("{path} clashes with the {taken} route."));
        }
        Ok(Self(path.to_string()))
    }

    /// The same path with its trailing slash toggled.
    pub fn slash_twin(&self) -> String {
        match self.0.strip_suffix('/') {
            Some(trimmed) => trimmed.to_string(),
            None => format!("{}/", self.0),
        }
    }
}

fn trim_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

impl AsRef<str> for SuccessPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
