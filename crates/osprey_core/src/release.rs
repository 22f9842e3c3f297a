use serde::Deserialize;

/// A release as returned by the releases API. Does not contain all fields;
/// only what asset matching needs is decoded.
#[derive(Deserialize, Debug, Clone)]
pub struct Release {
    pub assets: Vec<ReleaseAsset>,
}

/// A release's asset.
#[derive(Deserialize, Debug, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    /// The authenticated API endpoint for the asset, not its final storage
    /// location.
    pub url: String,
}

impl Release {
    /// Finds the asset whose name equals `filename` exactly. When a release
    /// carries duplicate names, the last entry in document order wins.
    pub fn asset_named(&self, filename: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().rfind(|asset| asset.name == filename)
    }
}
