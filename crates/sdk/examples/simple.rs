//! Simple SDK Example
//!
//! Demonstrates basic usage of the TODO SDK.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package todo-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package todo-sdk --example simple
//!    ```

use todo_sdk::TodoClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("TODO SDK - Simple Example");
    println!("=========================\n");

    let client = TodoClient::connect("http://127.0.0.1:9530").await?;

    let milk = client.create("Buy milk", "2%").await?;
    let dog = client.create("Walk dog", "").await?;
    println!("Created #{} and #{}", milk.id, dog.id);

    // Page through one item at a time
    let mut cursor = 0;
    loop {
        let page = client.read(cursor, 1).await?;
        let Some(last) = page.last() else { break };
        println!("  #{} {}", last.id, last.subject);
        cursor = last.id;
    }

    let milk = client.update(milk.id, "Buy milk", "skim").await?;
    println!("Updated #{} -> {:?}", milk.id, milk.description);

    client.delete(vec![milk.id, dog.id]).await?;
    println!("Deleted both; {} left", client.read(0, 10).await?.len());

    Ok(())
}
