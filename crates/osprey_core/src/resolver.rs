use crate::error::ResolveError;
use crate::release::Release;
use reqwest::{Client, StatusCode, header, redirect};
use std::time::Duration;
use tracing::debug;

/// Username half of the outbound Basic pair. The upstream API ignores it
/// when a token rides in the password slot, so a fixed literal works; only
/// the password carries credential material.
const BASIC_AUTH_USER: &str = "auth";

/// Version selector meaning "most recent published release".
pub const LATEST: &str = "latest";

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Base URL of the releases API.
    pub api_base: String,
    /// Budget for each of the two outbound calls, applied individually.
    pub timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Resolves `(owner, repo, version, filename, token)` to the asset's
/// pre-signed storage URL.
///
/// Holds no state beyond the HTTP client, so cloning is cheap and concurrent
/// calls never contend. The client is built once, with redirect-following
/// disabled: both upstream calls answer with redirects whose `Location`
/// header is the payload of interest, never a hop to chase.
#[derive(Clone)]
pub struct ReleaseResolver {
    client: Client,
    api_base: String,
}

impl ReleaseResolver {
    pub fn new(config: ResolverConfig) -> Self {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(config.timeout)
            .user_agent(concat!("osprey/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Runs the full lookup: release metadata, asset match, redirect probe.
    ///
    /// The returned URL is read verbatim from the probe's `Location` header
    /// and may be empty when the upstream omits one.
    pub async fn download_url(
        &self,
        owner: &str,
        repo: &str,
        version: &str,
        filename: &str,
        token: &str,
    ) -> Result<String, ResolveError> {
        let release = self.fetch_release(owner, repo, version, token).await?;

        let asset = release
            .asset_named(filename)
            .ok_or_else(|| ResolveError::AssetNotFound(filename.to_string()))?;

        debug!(owner, repo, version, filename, "matched release asset");

        self.probe_redirect(&asset.url, token).await
    }

    async fn fetch_release(
        &self,
        owner: &str,
        repo: &str,
        version: &str,
        token: &str,
    ) -> Result<Release, ResolveError> {
        let url = if version == LATEST {
            format!("{}/repos/{owner}/{repo}/releases/latest", self.api_base)
        } else {
            format!(
                "{}/repos/{owner}/{repo}/releases/tags/{version}",
                self.api_base
            )
        };

        let res = self
            .client
            .get(&url)
            .basic_auth(BASIC_AUTH_USER, Some(token))
            .send()
            .await?;

        // A redirect surfaces here as its raw 3xx status and is rejected
        // like any other non-200.
        if res.status() != StatusCode::OK {
            debug!(status = %res.status(), %url, "release lookup rejected");
            return Err(ResolveError::ReleaseNotFound);
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Asks the storage backend where the asset lives. The authenticated
    /// HEAD is answered with a redirect to an ephemeral pre-signed URL; that
    /// `Location` header is the result and is never dereferenced. An absent
    /// header comes back as the empty string.
    async fn probe_redirect(&self, asset_url: &str, token: &str) -> Result<String, ResolveError> {
        let res = self
            .client
            .head(asset_url)
            .header(header::ACCEPT, "application/octet-stream")
            .basic_auth(BASIC_AUTH_USER, Some(token))
            .send()
            .await?;

        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        debug!(%asset_url, %location, "redirect probe answered");

        Ok(location)
    }
}
