use axum::{Router, routing::get};
use osprey_core::resolver::{ReleaseResolver, ResolverConfig};
use tower_http::trace::TraceLayer;

mod api;

pub mod state;

use state::AppState;

/// The builder for the osprey server.
#[derive(Clone, Debug, Default)]
pub struct OspreyServer {
    config: ResolverConfig,
}

impl OspreyServer {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Router {
        let state = AppState {
            resolver: ReleaseResolver::new(self.config),
        };

        Router::new()
            .route("/status", get(api::status))
            .route(
                "/{owner}/{repo}/releases/download/{version}/{binary}",
                get(api::download),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

pub mod prelude {
    pub use crate::OspreyServer;
    pub use crate::state::*;
}
