use reqwest::Url;
use serde::{de::Visitor, Deserialize, Deserializer};

/// Root URL of the blog, used to build canonical links.
#[derive(Debug, Clone)]
pub struct SiteUrl(Url);

impl AsRef<Url> for SiteUrl {
    fn as_ref(&self) -> &Url {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SiteUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SiteUrlVisitor;

        impl<'de> Visitor<'de> for SiteUrlVisitor {
            type Value = SiteUrl;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an absolute site url without a path")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                SiteUrl::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SiteUrlVisitor)
    }
}

impl SiteUrl {
    pub fn parse(url: &str) -> Result<Self, String> {
        let url = Url::parse(url).map_err(|e| e.to_string())?;
        if url.path() != "/" {
            return Err(format!("expected a site root url. found: {url}"));
        }
        Ok(Self(url))
    }

    pub fn canonical(&self, page_path: &str) -> Result<Url, String> {
        self.0.join(page_path).map_err(|e| e.to_string())
    }
}
