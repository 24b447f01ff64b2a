//! TODO SDK - Rust Client Library
//!
//! Provides a convenient client for the TODO daemon's JSON-RPC surface.
//!
//! # Example
//!
//! ```no_run
//! use todo_sdk::TodoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to daemon
//!     let client = TodoClient::connect("http://127.0.0.1:9530").await?;
//!
//!     let created = client.create("Buy milk", "2%").await?;
//!     println!("TODO created: {}", created.id);
//!
//!     for todo in client.read(0, 10).await? {
//!         println!("{} {}", todo.id, todo.subject);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{method, TodoClient};
pub use error::{code, Result, SdkError};
pub use todo_core::domain::{Todo, TodoId};
