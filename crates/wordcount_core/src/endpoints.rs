use url::Url;

use crate::Identifier;

pub const HACKER_NEWS_API_BASE: &str = "https://hacker-news.firebaseio.com/v0/";

/// URL templates for the listing and item endpoints under one API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// A base without a trailing slash gets one, so joins keep its last path segment.
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn top_stories(&self) -> Url {
        self.join("topstories.json")
    }

    pub fn item(&self, id: Identifier) -> Url {
        self.join(&format!("item/{id}.json"))
    }

    fn join(&self, relative: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("{}{relative}", self.base.path()));
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(HACKER_NEWS_API_BASE).expect("hacker news base url")
    }
}
