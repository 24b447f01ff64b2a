// TODO Core - Domain Model, Ports & Use Cases
// NO infrastructure dependencies (the SQL lives in infra-sqlite)

pub mod application;
pub mod context;
pub mod domain;
pub mod error;
pub mod port;

pub use context::{cancel_pair, CancelHandle, Context};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
