use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::error::OtfetchError;

/// A sandbox-capped HTTP client that only allows requests to approved
/// domains. Every outbound request made by this workspace goes through it.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a new SandboxClient whose allowlist holds the Open Targets
    /// API hosts plus localhost for local test servers.
    pub fn new() -> Result<Self, OtfetchError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "api.platform.opentargets.org", // Open Targets Platform
            "api.genetics.opentargets.org", // Open Targets Genetics
            "localhost",
            "127.0.0.1",
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(OtfetchError::Http)?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern safely for POST
    /// requests.
    pub fn post(&self, url: &str) -> Result<reqwest::RequestBuilder, OtfetchError> {
        if !self.is_allowed(url) {
            return Err(OtfetchError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.post(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_targets_hosts_allowed() {
        let client = SandboxClient::new().unwrap();
        assert!(client.is_allowed("https://api.platform.opentargets.org/api/v4/graphql"));
        assert!(client.is_allowed("https://api.genetics.opentargets.org/graphql"));
    }

    #[test]
    fn test_unlisted_host_rejected() {
        let client = SandboxClient::new().unwrap();
        assert!(!client.is_allowed("https://example.com/graphql"));
        assert!(client.post("https://example.com/graphql").is_err());
    }

    #[test]
    fn test_allow_domain_extends_policy() {
        let mut client = SandboxClient::new().unwrap();
        assert!(!client.is_allowed("https://api.example.org/"));
        client.allow_domain("api.example.org");
        assert!(client.is_allowed("https://api.example.org/"));
    }
}
