//! JSON-RPC API Layer
//!
//! Thin transport adapter over `TodoService`: decodes the message shapes,
//! validates field presence, binds each call to a request-scoped
//! `Context` and maps `AppError` to JSON-RPC error codes.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
