pub mod app;
pub mod config;
pub mod error;
pub mod roster;
pub mod routes;
pub mod services;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;
