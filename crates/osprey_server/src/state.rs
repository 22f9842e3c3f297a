use osprey_core::resolver::ReleaseResolver;

#[derive(Clone)]
pub struct AppState {
    pub resolver: ReleaseResolver,
}
