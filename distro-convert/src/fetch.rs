//! Remote document access
//!
//! [`Fetcher`] is the seam between the converter and the network.
//! [`HttpFetcher`] talks to the real hosts with a blocking client.

use tracing::debug;

use crate::{Error, Result};

pub trait Fetcher {
    /// Fetch a document as text. Non-success statuses are errors.
    fn fetch_text(&self, url: &str) -> Result<String>;

    /// Check that a URL resolves. Any success status counts.
    fn probe(&self, url: &str) -> Result<()>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch_text(&self, url: &str) -> Result<String> {
        (**self).fetch_text(url)
    }

    fn probe(&self, url: &str) -> Result<()> {
        (**self).probe(url)
    }
}

/// Blocking HTTP fetcher
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("distro-convert/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)?.text().map_err(Error::Http)
    }

    fn probe(&self, url: &str) -> Result<()> {
        debug!("Probing {}", url);
        self.get(url).map(|_| ())
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    use super::Fetcher;
    use crate::{Error, Result};

    /// In-memory documents and probe targets; records every probe
    #[derive(Default)]
    pub struct FixtureFetcher {
        documents: HashMap<String, String>,
        existing: HashSet<String>,
        pub probes: RefCell<Vec<String>>,
    }

    impl FixtureFetcher {
        pub fn document(mut self, url: &str, content: &str) -> Self {
            self.documents.insert(url.to_string(), content.to_string());
            self
        }

        pub fn exists(mut self, url: &str) -> Self {
            self.existing.insert(url.to_string());
            self
        }

        pub fn probed(&self) -> Vec<String> {
            self.probes.borrow().clone()
        }
    }

    fn not_found(url: &str) -> Error {
        Error::HttpStatus {
            url: url.to_string(),
            status: 404,
        }
    }

    impl Fetcher for FixtureFetcher {
        fn fetch_text(&self, url: &str) -> Result<String> {
            self.documents.get(url).cloned().ok_or_else(|| not_found(url))
        }

        fn probe(&self, url: &str) -> Result<()> {
            self.probes.borrow_mut().push(url.to_string());
            if self.existing.contains(url) {
                Ok(())
            } else {
                Err(not_found(url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixture::FixtureFetcher;
    use super::*;

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new().is_ok());
    }

    #[test]
    fn test_fixture_fetcher_through_reference() {
        let fetcher = FixtureFetcher::default()
            .document("http://a/targets.yaml", "- groovy: [precise]\n")
            .exists("http://a/ok");
        let by_ref: &dyn Fetcher = &fetcher;

        assert_eq!(
            by_ref.fetch_text("http://a/targets.yaml").unwrap(),
            "- groovy: [precise]\n"
        );
        assert!(by_ref.probe("http://a/ok").is_ok());
        assert!(matches!(
            by_ref.probe("http://a/missing"),
            Err(Error::HttpStatus { status: 404, .. })
        ));
        assert_eq!(fetcher.probed(), vec!["http://a/ok", "http://a/missing"]);
    }
}
