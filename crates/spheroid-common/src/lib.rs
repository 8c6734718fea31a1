pub mod errors;
pub mod types;

pub use errors::{ConfigError, MeshError, SpheroidError};
pub use types::{Color, Size};

pub type Result<T> = std::result::Result<T, SpheroidError>;
