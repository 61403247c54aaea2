pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, DashboardConfig, RemoteConfig};
pub use error::{DashError, Result};
pub use types::{PokemonId, Side};
