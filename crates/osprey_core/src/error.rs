use thiserror::Error;

/// Terminal failure modes of a resolution call.
///
/// Every variant aborts the call; nothing is retried. Transport layers map
/// [`ResolveError::AuthMissing`] to a client error and everything else to a
/// server error.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("You need to provide HTTP basic auth")]
    AuthMissing,

    #[error("Did not find the requested release")]
    ReleaseNotFound,

    #[error("Did not find {0} in the release assets")]
    AssetNotFound(String),

    #[error("Release metadata did not decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
