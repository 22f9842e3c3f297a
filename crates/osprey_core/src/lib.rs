pub mod auth;
pub mod error;
pub mod release;
pub mod resolver;

pub mod prelude {
    pub use super::auth::*;
    pub use super::error::*;
    pub use super::release::*;
    pub use super::resolver::*;
}
