//! HTTP protocol implementation.
//!
//! This module implements the single-request HTTP cycle: one request line,
//! the raw header lines, one response, then the connection is closed. There
//! is no keep-alive.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses the request line into a request
//! - **`request`**: Request representation (method, target, raw headers)
//! - **`resolve`**: Maps a request onto the filesystem and classifies the outcome
//! - **`response`**: Response representation with the canned error bodies
//! - **`writer`**: Serializes and writes a response to the client
//! - **`mime`**: Content-type detection based on file name suffixes
//!
//! # Connection State Machine
//!
//! Each client connection goes through a single cycle:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read request line + header lines
//!        └──────┬──────┘
//!               │ Request received (early EOF → Closed, no response)
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← Map target to a file, classify the outcome
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send head, stream body
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Always reached, success or failure
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use petrel::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8081").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, ".".into());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod resolve;
pub mod writer;
pub mod mime;
