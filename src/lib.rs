pub use osprey_core::*;

#[cfg(feature = "server")]
pub mod server {
    pub use osprey_server::*;
}

pub mod prelude {
    pub use osprey_core::prelude::*;

    #[cfg(feature = "server")]
    pub use osprey_server::prelude::*;
}
